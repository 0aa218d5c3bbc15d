use super::tile::{Suit, Tile};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// 牌墙（Wall）
///
/// 发牌前存储全部 108 张牌，支持洗牌和从一端抽牌。
#[derive(Debug, Clone)]
pub struct Wall {
    /// 未发出的牌，从末尾抽取
    tiles: Vec<Tile>,
}

impl Wall {
    /// 创建一副完整的牌墙（108 张，确定顺序）
    pub fn new() -> Self {
        let mut tiles = Vec::with_capacity(Tile::TOTAL_COUNT);

        // 生成所有牌：每种花色 1-9，每种 4 张
        for suit in Suit::all() {
            for rank in Tile::MIN_RANK..=Tile::MAX_RANK {
                for _ in 0..Tile::COPIES_PER_KIND {
                    // new 只会在 rank 非法时失败，这里的范围保证有效
                    if let Some(tile) = Tile::new(suit, rank) {
                        tiles.push(tile);
                    }
                }
            }
        }

        Self { tiles }
    }

    /// 洗牌
    ///
    /// Fisher-Yates 均匀随机置换，时间复杂度 O(n)
    pub fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.tiles.shuffle(&mut rng);
    }

    /// 抽取一张牌（从牌墙末尾）
    ///
    /// # Returns
    ///
    /// - `Some(Tile)`：成功抽取一张牌
    /// - `None`：牌墙已空
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// 查询剩余牌数
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    /// 检查牌墙是否为空
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// 重建并洗牌（开新一局时使用）
    pub fn reset_and_shuffle(&mut self) {
        *self = Self::new();
        self.shuffle();
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self::new()
    }
}
