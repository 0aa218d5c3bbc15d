use crate::tile::Tile;

/// 杠的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum KongKind {
    /// 直杠（杠别人打出的第四张）
    Direct,
    /// 暗杠（手里四张自己杠）
    Concealed,
    /// 补杠（已碰的刻子摸到第四张升级）
    Promoted,
}

/// 亮出的牌组（碰或杠）
///
/// 由形成它的那家独占，形成后不可变，唯一的例外是碰→杠的补杠升级。
/// 胡牌判定中每组固定占 3 个逻辑名额，与实际张数无关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Meld {
    /// 碰（三张相同牌）
    Pung { tile: Tile },
    /// 杠（四张相同牌）
    Kong { tile: Tile, kind: KongKind },
}

impl Meld {
    /// 牌组对应的牌
    pub fn tile(&self) -> Tile {
        match self {
            Meld::Pung { tile } | Meld::Kong { tile, .. } => *tile,
        }
    }

    /// 实际占用的实体牌张数（碰 3 张，杠 4 张）
    pub fn physical_count(&self) -> usize {
        match self {
            Meld::Pung { .. } => 3,
            Meld::Kong { .. } => 4,
        }
    }
}
