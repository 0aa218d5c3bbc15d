/// 牌相关模块
///
/// 包含牌与花色、手牌、牌墙和胡牌判定

pub mod hand;
pub mod tile;
pub mod wall;
pub mod win_check;

pub use hand::Hand;
pub use tile::{sort_tiles, Suit, Tile};
pub use wall::Wall;
pub use win_check::WinChecker;
