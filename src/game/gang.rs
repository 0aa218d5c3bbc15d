use crate::game::engine::EngineError;
use crate::game::meld::{KongKind, Meld};
use crate::game::player::Player;
use crate::tile::Tile;

/// 杠牌操作器
///
/// 三种杠：直杠（杠别人的弃牌）、暗杠（手里四张）、补杠（碰升级）。
pub struct GangHandler;

impl GangHandler {
    /// 检查是否可以直杠
    ///
    /// 直杠条件：手牌中有三张与弃牌相同的牌
    pub fn can_direct_gang(player: &Player, tile: &Tile) -> bool {
        player.hand.tile_count(*tile) >= 3
    }

    /// 检查是否可以暗杠
    ///
    /// 暗杠条件：手牌中有全部四张
    pub fn can_concealed_gang(player: &Player, tile: &Tile) -> bool {
        player.hand.tile_count(*tile) == 4
    }

    /// 检查是否可以补杠
    ///
    /// 补杠条件：已亮出对应的碰，且手牌中还有第四张
    pub fn can_promote_gang(player: &Player, tile: &Tile) -> bool {
        let has_pung = player
            .melds
            .iter()
            .any(|meld| matches!(meld, Meld::Pung { tile: t } if t == tile));
        has_pung && player.hand.tile_count(*tile) >= 1
    }

    /// 执行直杠
    ///
    /// 从手牌移除三张相同的牌，加上被杠的弃牌亮出一组明杠。
    pub fn direct_gang(player: &mut Player, tile: Tile) -> Result<(), EngineError> {
        if !player.hand.remove_copies(tile, 3) {
            return Err(EngineError::InsufficientTiles);
        }
        player.melds.push(Meld::Kong {
            tile,
            kind: KongKind::Direct,
        });
        Ok(())
    }

    /// 执行暗杠
    ///
    /// 从手牌移除四张相同的牌，亮出一组暗杠。
    pub fn concealed_gang(player: &mut Player, tile: Tile) -> Result<(), EngineError> {
        if !player.hand.remove_copies(tile, 4) {
            return Err(EngineError::InsufficientTiles);
        }
        player.melds.push(Meld::Kong {
            tile,
            kind: KongKind::Concealed,
        });
        Ok(())
    }

    /// 执行补杠
    ///
    /// 就地把对应的碰升级为杠，并从手牌移除第四张。
    /// 没有对应的碰返回 `NoMatchingPeng`，手牌里没有第四张返回
    /// `TileNotInHand`，两种失败都不改变状态。
    pub fn promote_gang(player: &mut Player, tile: Tile) -> Result<(), EngineError> {
        let pung_index = player
            .melds
            .iter()
            .position(|meld| matches!(meld, Meld::Pung { tile: t } if *t == tile))
            .ok_or(EngineError::NoMatchingPeng)?;

        if !player.hand.remove_tile(tile) {
            return Err(EngineError::TileNotInHand);
        }

        player.melds[pung_index] = Meld::Kong {
            tile,
            kind: KongKind::Promoted,
        };
        Ok(())
    }
}
