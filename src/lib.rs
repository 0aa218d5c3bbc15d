/// 四川麻将核心引擎
///
/// 四人四川规则（万、筒、条三门，无字牌花牌，共 108 张）：
/// 摸牌/出牌/碰/杠/胡的回合状态机，以及递归回溯的胡牌判定。
/// 不含计分、不含界面，展示层只读状态并把玩家意图送入引擎。

pub mod game;
pub mod tile;

// 重新导出常用类型
pub use tile::{sort_tiles, Hand, Suit, Tile, Wall, WinChecker};

pub use game::engine::{EndReason, EngineError, GameInfo, Phase, PlayerView, TurnEngine};
pub use game::gang::GangHandler;
pub use game::meld::{KongKind, Meld};
pub use game::peng::PengHandler;
pub use game::player::Player;
pub use game::seat::Seat;
