use super::tile::{sort_tiles, Tile};
use crate::game::engine::EngineError;

/// 手牌（Hand）
///
/// 保存一名玩家的暗牌，始终按花色、数字排序（理牌状态）。
/// 出牌按排序后的下标定位，因此这里用有序序列而不是计数表。
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Hand {
    /// 暗牌序列，始终有序
    tiles: Vec<Tile>,
}

impl Hand {
    /// 创建空手牌
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// 摸入一张牌并保持有序
    pub fn draw(&mut self, tile: Tile) {
        let pos = self
            .tiles
            .partition_point(|t| t.sort_key() <= tile.sort_key());
        self.tiles.insert(pos, tile);
    }

    /// 打出指定下标的牌
    ///
    /// 下标超出范围时返回 `OutOfRange`，手牌不变。
    pub fn discard_at(&mut self, index: usize) -> Result<Tile, EngineError> {
        if index >= self.tiles.len() {
            return Err(EngineError::OutOfRange);
        }
        Ok(self.tiles.remove(index))
    }

    /// 查询某种牌的张数
    pub fn tile_count(&self, tile: Tile) -> u8 {
        self.tiles.iter().filter(|t| **t == tile).count() as u8
    }

    /// 移除一张指定的牌
    ///
    /// 手牌中没有该牌时返回 `false`，手牌不变。
    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|t| *t == tile) {
            Some(pos) => {
                self.tiles.remove(pos);
                true
            }
            None => false,
        }
    }

    /// 移除 n 张相同的牌（全有或全无）
    ///
    /// 张数不足时不做任何修改，返回 `false`。
    pub fn remove_copies(&mut self, tile: Tile, n: u8) -> bool {
        if self.tile_count(tile) < n {
            return false;
        }
        for _ in 0..n {
            self.remove_tile(tile);
        }
        true
    }

    /// 获取总牌数
    pub fn total_count(&self) -> usize {
        self.tiles.len()
    }

    /// 以有序切片访问暗牌
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// 检查手牌是否为空
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// 清空手牌
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// 重新理牌
    ///
    /// 手牌在摸牌时已保持有序，这里兜底重排一次
    pub fn sort(&mut self) {
        sort_tiles(&mut self.tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_creation() {
        let hand = Hand::new();
        assert!(hand.is_empty());
        assert_eq!(hand.total_count(), 0);
    }

    #[test]
    fn test_draw_keeps_sorted() {
        let mut hand = Hand::new();
        hand.draw(Tile::Tong(5));
        hand.draw(Tile::Wan(3));
        hand.draw(Tile::Tiao(1));
        hand.draw(Tile::Wan(1));
        hand.draw(Tile::Tong(5));

        assert_eq!(
            hand.as_slice(),
            &[
                Tile::Wan(1),
                Tile::Wan(3),
                Tile::Tong(5),
                Tile::Tong(5),
                Tile::Tiao(1),
            ]
        );
    }

    #[test]
    fn test_discard_at() {
        let mut hand = Hand::new();
        hand.draw(Tile::Wan(1));
        hand.draw(Tile::Wan(2));
        hand.draw(Tile::Wan(3));

        let tile = hand.discard_at(1).unwrap();
        assert_eq!(tile, Tile::Wan(2));
        assert_eq!(hand.as_slice(), &[Tile::Wan(1), Tile::Wan(3)]);
    }

    #[test]
    fn test_discard_at_out_of_range() {
        let mut hand = Hand::new();
        hand.draw(Tile::Wan(1));

        assert_eq!(hand.discard_at(1), Err(EngineError::OutOfRange));
        assert_eq!(hand.discard_at(99), Err(EngineError::OutOfRange));
        // 失败后手牌不变
        assert_eq!(hand.total_count(), 1);
    }

    #[test]
    fn test_tile_count() {
        let mut hand = Hand::new();
        for _ in 0..3 {
            hand.draw(Tile::Tiao(7));
        }
        hand.draw(Tile::Wan(1));

        assert_eq!(hand.tile_count(Tile::Tiao(7)), 3);
        assert_eq!(hand.tile_count(Tile::Wan(1)), 1);
        assert_eq!(hand.tile_count(Tile::Tong(9)), 0);
    }

    #[test]
    fn test_remove_copies_all_or_nothing() {
        let mut hand = Hand::new();
        hand.draw(Tile::Wan(5));
        hand.draw(Tile::Wan(5));

        // 张数不足，不应移除任何牌
        assert!(!hand.remove_copies(Tile::Wan(5), 3));
        assert_eq!(hand.tile_count(Tile::Wan(5)), 2);

        assert!(hand.remove_copies(Tile::Wan(5), 2));
        assert_eq!(hand.tile_count(Tile::Wan(5)), 0);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut hand = Hand::new();
        hand.draw(Tile::Wan(1));
        hand.draw(Tile::Tong(2));
        hand.clear();
        assert!(hand.is_empty());
    }
}
