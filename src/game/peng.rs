use crate::game::engine::EngineError;
use crate::game::meld::Meld;
use crate::game::player::Player;
use crate::tile::Tile;

/// 碰牌操作器
pub struct PengHandler;

impl PengHandler {
    /// 检查是否可以碰牌
    ///
    /// 碰牌条件：手牌中至少有两张与弃牌相同的牌
    pub fn can_peng(player: &Player, tile: &Tile) -> bool {
        player.hand.tile_count(*tile) >= 2
    }

    /// 执行碰牌
    ///
    /// 从手牌移除两张相同的牌，加上被碰的弃牌亮出一组碰。
    /// 张数不足时返回 `InsufficientTiles`，手牌不变。
    pub fn peng(player: &mut Player, tile: Tile) -> Result<(), EngineError> {
        if !player.hand.remove_copies(tile, 2) {
            return Err(EngineError::InsufficientTiles);
        }
        player.melds.push(Meld::Pung { tile });
        Ok(())
    }
}
