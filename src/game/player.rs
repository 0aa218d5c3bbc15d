use crate::game::meld::Meld;
use crate::game::seat::Seat;
use crate::tile::win_check::WinChecker;
use crate::tile::{Hand, Tile};
use smallvec::SmallVec;

/// 玩家（一个座位）
///
/// 持有暗牌、亮出的碰/杠牌组、弃牌历史和三个临时的响应标志。
/// 响应标志在每次别家出牌后重算，响应结束后清除。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// 座位
    pub seat: Seat,
    /// 暗牌（始终有序）
    pub hand: Hand,
    /// 已亮出的碰/杠（一局最多 4 组）
    pub melds: SmallVec<[Meld; 4]>,
    /// 弃牌历史（只追加）
    pub discards: Vec<Tile>,
    /// 是否轮到该家（仅在出牌阶段有意义）
    pub is_current: bool,
    /// 可以碰最近的弃牌
    pub may_peng: bool,
    /// 可以杠最近的弃牌
    pub may_gang: bool,
    /// 可以胡最近的弃牌
    pub may_hu: bool,
}

impl Player {
    /// 创建新玩家
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Hand::new(),
            melds: SmallVec::new(),
            discards: Vec::new(),
            is_current: false,
            may_peng: false,
            may_gang: false,
            may_hu: false,
        }
    }

    /// 重置到新一局的初始状态
    pub fn reset(&mut self) {
        self.hand.clear();
        self.melds.clear();
        self.discards.clear();
        self.is_current = false;
        self.clear_claims();
    }

    /// 清除三个响应标志
    pub fn clear_claims(&mut self) {
        self.may_peng = false;
        self.may_gang = false;
        self.may_hu = false;
    }

    /// 是否有任意响应标志
    pub fn has_claim(&self) -> bool {
        self.may_peng || self.may_gang || self.may_hu
    }

    /// 暗牌张数
    pub fn hand_size(&self) -> usize {
        self.hand.total_count()
    }

    /// 当前手牌（含已亮牌组的逻辑名额）是否构成胡牌
    pub fn can_win(&self) -> bool {
        WinChecker::is_winning(self.hand.as_slice(), self.melds.len())
    }

    /// 加上一张牌后是否构成胡牌（不修改手牌）
    ///
    /// 用于别家出牌后的胡牌响应判定：临时并入弃牌再判定。
    pub fn can_win_with(&self, tile: Tile) -> bool {
        let mut tiles: Vec<Tile> = self.hand.as_slice().to_vec();
        tiles.push(tile);
        WinChecker::is_winning(&tiles, self.melds.len())
    }
}
