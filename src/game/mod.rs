/// 游戏逻辑模块
///
/// 包含座位、玩家、碰/杠操作和回合引擎

pub mod engine;
pub mod gang;
pub mod meld;
pub mod peng;
pub mod player;
pub mod seat;
