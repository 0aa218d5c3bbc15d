use std::fmt;

/// 麻将牌类型
///
/// 四川麻将共 108 张牌：万、筒、条各 36 张（1-9 各 4 张），
/// 没有字牌和花牌。同花色同数字的牌完全等价，没有额外的身份。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Tile {
    /// 万子（1-9，共 36 张）
    Wan(u8),
    /// 筒子（1-9，共 36 张）
    Tong(u8),
    /// 条子（1-9，共 36 张）
    Tiao(u8),
}

impl Tile {
    /// 总牌数：108 张
    pub const TOTAL_COUNT: usize = 108;

    /// 牌的种类数：27 种（3 花色 × 9 数字）
    pub const KIND_COUNT: usize = 27;

    /// 每种牌的张数：4 张
    pub const COPIES_PER_KIND: u8 = 4;

    /// 每种花色的数字范围：1-9
    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// 创建一张牌，验证数字有效性
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        if !(Self::MIN_RANK..=Self::MAX_RANK).contains(&rank) {
            return None;
        }
        Some(match suit {
            Suit::Wan => Tile::Wan(rank),
            Suit::Tong => Tile::Tong(rank),
            Suit::Tiao => Tile::Tiao(rank),
        })
    }

    /// 获取花色
    pub fn suit(&self) -> Suit {
        match self {
            Tile::Wan(_) => Suit::Wan,
            Tile::Tong(_) => Suit::Tong,
            Tile::Tiao(_) => Suit::Tiao,
        }
    }

    /// 获取数字（1-9）
    pub fn rank(&self) -> u8 {
        match self {
            Tile::Wan(r) | Tile::Tong(r) | Tile::Tiao(r) => *r,
        }
    }

    /// 排序权重：花色为主、数字为次的全序
    ///
    /// 万 < 筒 < 条，同花色内按数字升序
    pub fn sort_key(&self) -> u16 {
        self.suit() as u16 * 100 + self.rank() as u16
    }

    /// 检查三张牌是否能组成顺子（同花色连续三张）
    pub fn can_form_run(&self, other1: &Tile, other2: &Tile) -> bool {
        if self.suit() != other1.suit() || self.suit() != other2.suit() {
            return false;
        }
        let mut ranks = [self.rank(), other1.rank(), other2.rank()];
        ranks.sort();
        ranks[0] + 1 == ranks[1] && ranks[1] + 1 == ranks[2]
    }

    /// 同花色的下一张牌（9 之后没有，不回绕）
    pub fn successor(&self) -> Option<Tile> {
        Tile::new(self.suit(), self.rank() + 1)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit_str = match self.suit() {
            Suit::Wan => "万",
            Suit::Tong => "筒",
            Suit::Tiao => "条",
        };
        write!(f, "{}{}", self.rank(), suit_str)
    }
}

/// 花色枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Suit {
    Wan = 0,
    Tong = 1,
    Tiao = 2,
}

impl Suit {
    /// 所有花色
    pub fn all() -> [Suit; 3] {
        [Suit::Wan, Suit::Tong, Suit::Tiao]
    }
}

/// 按花色和数字对牌序列排序（理牌）
pub fn sort_tiles(tiles: &mut [Tile]) {
    tiles.sort_by_key(Tile::sort_key);
}
