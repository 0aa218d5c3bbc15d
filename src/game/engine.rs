use crate::game::gang::GangHandler;
use crate::game::meld::Meld;
use crate::game::peng::PengHandler;
use crate::game::player::Player;
use crate::game::seat::Seat;
use crate::tile::{Tile, Wall};

/// 引擎错误
///
/// 所有命令级错误都是局部的、可恢复的：命令失败时桌面状态保持
/// 不变，调用方重新读取状态即可。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// 出牌下标超出手牌范围
    OutOfRange,
    /// 碰/杠所需的相同牌张数不足
    InsufficientTiles,
    /// 补杠时手牌中没有第四张
    TileNotInHand,
    /// 补杠时没有对应的碰
    NoMatchingPeng,
    /// 牌墙已空（不是故障，而是流局的结束条件）
    WallExhausted,
    /// 动作在当前阶段或当前标志下不合法
    InvalidAction,
    /// 复验与响应标志不一致（标志过期，属于引擎缺陷）
    InvariantViolation,
}

/// 游戏阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// 开局前的空闲状态
    Waiting,
    /// 洗牌、发牌中的瞬时状态
    Dealing,
    /// 当前家已摸牌待出牌，且没有未决的响应
    Playing,
    /// 刚出的牌被至少一家标记了碰/杠/胡响应
    WaitingAction,
    /// 终态：胡牌或流局
    GameOver,
}

/// 结束原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EndReason {
    /// 流局（牌墙摸完且无未决响应）
    DrawnGame,
    /// 有人胡牌
    Win { seat: Seat },
}

/// 某一家的可见投影（供展示层使用）
///
/// 不包含暗牌内容：别家的暗牌永远不通过视图暴露。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerView {
    pub seat: Seat,
    pub hand_size: usize,
    pub melds: Vec<Meld>,
    pub discards: Vec<Tile>,
    pub is_current: bool,
    pub may_peng: bool,
    pub may_gang: bool,
    pub may_hu: bool,
}

/// 桌面概览
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameInfo {
    pub phase: Phase,
    pub current_seat: Seat,
    pub dealer: Seat,
    pub round: u32,
    pub remaining_tiles: usize,
    pub winner: Option<Seat>,
}

/// 回合引擎
///
/// 持有四家手牌、牌墙和弃牌堆，驱动 摸牌→出牌→响应 的状态机。
/// 显式构造、由调用方独占持有，没有全局单例；所有命令都是同步、
/// 非阻塞的，驱动意图由调用方严格串行送入。
pub struct TurnEngine {
    /// 四家玩家，按 东南西北 的座位顺序
    players: [Player; 4],
    /// 牌墙
    wall: Wall,
    /// 桌面弃牌堆（只追加，被碰/杠/胡的牌从顶上取走）
    discard_pile: Vec<Tile>,
    /// 最近一次出牌（出牌者，牌），仅在出牌与响应结算之间有效
    last_discard: Option<(Seat, Tile)>,
    /// 当前家
    current_seat: Seat,
    /// 庄家
    dealer: Seat,
    /// 局数，开局时递增
    round: u32,
    /// 阶段
    phase: Phase,
    /// 结束原因（仅 GameOver 阶段为 Some）
    end: Option<EndReason>,
}

impl TurnEngine {
    /// 每家起手牌数
    pub const INITIAL_HAND_SIZE: usize = 13;

    /// 创建引擎（开局前的空闲状态）
    pub fn new() -> Self {
        Self {
            players: [
                Player::new(Seat::East),
                Player::new(Seat::South),
                Player::new(Seat::West),
                Player::new(Seat::North),
            ],
            wall: Wall::new(),
            discard_pile: Vec::new(),
            last_discard: None,
            current_seat: Seat::East,
            dealer: Seat::East,
            round: 0,
            phase: Phase::Waiting,
            end: None,
        }
    }

    // ---------- 命令面 ----------

    /// 开始新的一局
    ///
    /// 重置四家、重建并洗混牌墙、清空弃牌堆，然后从庄家开始按
    /// 东南西北轮转发 13 轮牌（每轮每家一张，庄家先拿）。发完后
    /// 庄家直接补到 14 张成为当前家：庄家的第一个回合不再摸牌。
    pub fn start_new_game(&mut self) {
        self.phase = Phase::Dealing;
        for player in &mut self.players {
            player.reset();
        }
        self.wall.reset_and_shuffle();
        self.discard_pile.clear();
        self.last_discard = None;
        self.end = None;
        self.round += 1;

        // 13 轮轮转发牌，每轮庄家先拿
        for _ in 0..Self::INITIAL_HAND_SIZE {
            for offset in 0..4 {
                let seat = Seat::from_index(self.dealer.index() + offset);
                if let Some(tile) = self.wall.draw() {
                    self.players[seat.index()].hand.draw(tile);
                }
            }
        }

        self.phase = Phase::Playing;
        self.set_current(self.dealer);

        // 庄家的第 14 张
        if let Some(tile) = self.wall.draw() {
            self.players[self.dealer.index()].hand.draw(tile);
        }
    }

    /// 当前家摸牌
    ///
    /// 牌墙已空时转入流局（`GameOver`），返回 `WallExhausted`。
    pub fn draw_for_current_seat(&mut self) -> Result<Tile, EngineError> {
        if self.phase != Phase::Playing {
            return Err(EngineError::InvalidAction);
        }
        match self.wall.draw() {
            Some(tile) => {
                self.players[self.current_seat.index()].hand.draw(tile);
                Ok(tile)
            }
            None => {
                self.finish(EndReason::DrawnGame);
                Err(EngineError::WallExhausted)
            }
        }
    }

    /// 当前家出牌（按手牌下标）
    ///
    /// 成功后重算另外三家对这张牌的碰/杠/胡响应标志：任何一家
    /// 有响应则进入 `WaitingAction` 等待表态，否则立即轮转到下家。
    pub fn discard(&mut self, index: usize) -> Result<Tile, EngineError> {
        if self.phase != Phase::Playing {
            return Err(EngineError::InvalidAction);
        }

        let seat = self.current_seat;
        let tile = self.players[seat.index()].hand.discard_at(index)?;
        self.players[seat.index()].discards.push(tile);
        self.discard_pile.push(tile);
        self.last_discard = Some((seat, tile));

        if self.evaluate_claims(seat, tile) {
            self.phase = Phase::WaitingAction;
        } else {
            self.last_discard = None;
            self.advance_turn();
        }

        Ok(tile)
    }

    /// 指定座位碰最近的弃牌
    ///
    /// 仅在 `WaitingAction` 阶段、该家碰标志为真时合法；只要还有
    /// 别家持有胡标志，碰请求按优先级被拒绝。成功后弃牌离开弃牌
    /// 堆并入新的碰，响应标志全部清除，碰牌者成为当前家继续出牌。
    pub fn claim_peng(&mut self, seat: Seat) -> Result<(), EngineError> {
        if self.phase != Phase::WaitingAction || !self.players[seat.index()].may_peng {
            return Err(EngineError::InvalidAction);
        }
        if self.win_claim_pending_besides(seat) {
            return Err(EngineError::InvalidAction);
        }
        let (_, tile) = self.last_discard.ok_or(EngineError::InvariantViolation)?;

        PengHandler::peng(&mut self.players[seat.index()], tile)?;
        self.discard_pile.pop();
        self.resolve_claim(seat);
        Ok(())
    }

    /// 指定座位直杠最近的弃牌
    ///
    /// 合法性同 [`claim_peng`](Self::claim_peng)。杠成后立即为杠牌者
    /// 补摸一张（牌墙已空则转入流局）。
    pub fn claim_gang(&mut self, seat: Seat) -> Result<(), EngineError> {
        if self.phase != Phase::WaitingAction || !self.players[seat.index()].may_gang {
            return Err(EngineError::InvalidAction);
        }
        if self.win_claim_pending_besides(seat) {
            return Err(EngineError::InvalidAction);
        }
        let (_, tile) = self.last_discard.ok_or(EngineError::InvariantViolation)?;

        GangHandler::direct_gang(&mut self.players[seat.index()], tile)?;
        self.discard_pile.pop();
        self.resolve_claim(seat);

        // 杠后补摸（空墙时 draw_for_current_seat 已把局面转到流局）
        let _ = self.draw_for_current_seat();
        Ok(())
    }

    /// 指定座位胡最近的弃牌
    ///
    /// 把弃牌临时并入该家暗牌并复验胡牌（防止标志过期）。复验
    /// 通过则转入 `GameOver` 并记录赢家；复验失败说明标志与判定
    /// 不一致，撤回弃牌、状态不变，返回 `InvariantViolation`。
    pub fn claim_win(&mut self, seat: Seat) -> Result<(), EngineError> {
        if self.phase != Phase::WaitingAction || !self.players[seat.index()].may_hu {
            return Err(EngineError::InvalidAction);
        }
        let (_, tile) = self.last_discard.ok_or(EngineError::InvariantViolation)?;

        self.players[seat.index()].hand.draw(tile);
        if !self.players[seat.index()].can_win() {
            self.players[seat.index()].hand.remove_tile(tile);
            return Err(EngineError::InvariantViolation);
        }

        self.discard_pile.pop();
        self.last_discard = None;
        self.clear_all_claims();
        self.finish(EndReason::Win { seat });
        Ok(())
    }

    /// 指定座位放弃响应（过）
    ///
    /// 清除该家的三个响应标志；当所有座位都不再持有标志时，轮转
    /// 到出牌者的下家。对已无标志的座位调用是幂等的空操作，不会
    /// 额外推进回合。
    pub fn pass(&mut self, seat: Seat) {
        self.players[seat.index()].clear_claims();

        if self.phase == Phase::WaitingAction && !self.players.iter().any(Player::has_claim) {
            self.last_discard = None;
            self.advance_turn();
        }
    }

    /// 当前家在自己回合宣告暗杠
    ///
    /// 摸牌之后、出牌之前，手里集齐四张时可以暗杠指定的牌；
    /// 杠成后立即补摸一张。
    pub fn declare_concealed_gang(&mut self, seat: Seat, tile: Tile) -> Result<(), EngineError> {
        if self.phase != Phase::Playing || seat != self.current_seat {
            return Err(EngineError::InvalidAction);
        }
        GangHandler::concealed_gang(&mut self.players[seat.index()], tile)?;

        let _ = self.draw_for_current_seat();
        Ok(())
    }

    /// 当前家在自己回合宣告补杠
    ///
    /// 已亮出的碰摸到第四张时就地升级为杠；杠成后立即补摸一张。
    pub fn declare_promote_gang(&mut self, seat: Seat, tile: Tile) -> Result<(), EngineError> {
        if self.phase != Phase::Playing || seat != self.current_seat {
            return Err(EngineError::InvalidAction);
        }
        GangHandler::promote_gang(&mut self.players[seat.index()], tile)?;

        let _ = self.draw_for_current_seat();
        Ok(())
    }

    /// 指定座位理牌
    pub fn sort_hand(&mut self, seat: Seat) {
        self.players[seat.index()].hand.sort();
    }

    // ---------- 查询面 ----------

    /// 当前阶段
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 当前家
    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    /// 庄家
    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// 局数
    pub fn round(&self) -> u32 {
        self.round
    }

    /// 牌墙剩余张数
    pub fn remaining_tiles(&self) -> usize {
        self.wall.remaining_count()
    }

    /// 结束原因（未结束时为 None）
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end
    }

    /// 赢家（流局或未结束时为 None）
    pub fn winner(&self) -> Option<Seat> {
        match self.end {
            Some(EndReason::Win { seat }) => Some(seat),
            _ => None,
        }
    }

    /// 桌面弃牌堆（顶部 = 最近弃牌）
    pub fn discard_pile(&self) -> &[Tile] {
        &self.discard_pile
    }

    /// 最近一次出牌（出牌者，牌），仅在响应窗口内为 Some
    pub fn last_discard(&self) -> Option<(Seat, Tile)> {
        self.last_discard
    }

    /// 某家自己的暗牌（供本地展示层渲染自家手牌）
    pub fn hand(&self, seat: Seat) -> &[Tile] {
        self.players[seat.index()].hand.as_slice()
    }

    /// 某家已亮出的牌组
    pub fn melds(&self, seat: Seat) -> &[Meld] {
        &self.players[seat.index()].melds
    }

    /// 某家的可见投影（不含暗牌内容）
    pub fn player_view(&self, seat: Seat) -> PlayerView {
        let player = &self.players[seat.index()];
        PlayerView {
            seat,
            hand_size: player.hand_size(),
            melds: player.melds.to_vec(),
            discards: player.discards.clone(),
            is_current: player.is_current,
            may_peng: player.may_peng,
            may_gang: player.may_gang,
            may_hu: player.may_hu,
        }
    }

    /// 桌面概览
    pub fn game_info(&self) -> GameInfo {
        GameInfo {
            phase: self.phase,
            current_seat: self.current_seat,
            dealer: self.dealer,
            round: self.round,
            remaining_tiles: self.wall.remaining_count(),
            winner: self.winner(),
        }
    }

    // ---------- 内部流程 ----------

    /// 出牌后重算另外三家的响应标志，返回是否有任何响应
    ///
    /// 三个标志相互独立：碰/杠看静态张数，胡通过临时并入弃牌
    /// 再判定（判定后撤回，不改变手牌）。
    fn evaluate_claims(&mut self, discarder: Seat, tile: Tile) -> bool {
        let mut any = false;
        for seat in Seat::ALL {
            let player = &mut self.players[seat.index()];
            player.clear_claims();
            if seat == discarder {
                continue;
            }
            player.may_peng = PengHandler::can_peng(player, &tile);
            player.may_gang = GangHandler::can_direct_gang(player, &tile);
            player.may_hu = player.can_win_with(tile);
            any |= player.has_claim();
        }
        any
    }

    /// 除 `claimant` 外是否还有别家持有胡标志
    ///
    /// 优先级策略：胡 > 杠/碰。胡标志未清空前，别家的碰/杠请求
    /// 一律拒绝；同一张弃牌不可能同时被两家碰/杠（场上最多剩
    /// 三张相同牌），所以碰/杠之间不需要再排序。
    fn win_claim_pending_besides(&self, claimant: Seat) -> bool {
        self.players
            .iter()
            .any(|p| p.seat != claimant && p.may_hu)
    }

    /// 碰/杠成立后的公共收尾：清标志、清出牌标记、碰杠者成为当前家
    fn resolve_claim(&mut self, claimant: Seat) {
        self.clear_all_claims();
        self.last_discard = None;
        self.set_current(claimant);
        self.phase = Phase::Playing;
    }

    /// 轮转到下家并让它摸牌
    fn advance_turn(&mut self) {
        let next = self.current_seat.next();
        self.set_current(next);
        self.phase = Phase::Playing;

        // 空墙时 draw_for_current_seat 已把局面转到流局
        let _ = self.draw_for_current_seat();
    }

    /// 设置当前家（同时只有一家持有当前标记）
    fn set_current(&mut self, seat: Seat) {
        for player in &mut self.players {
            player.is_current = false;
        }
        self.players[seat.index()].is_current = true;
        self.current_seat = seat;
    }

    /// 清除所有座位的响应标志
    fn clear_all_claims(&mut self) {
        for player in &mut self.players {
            player.clear_claims();
        }
    }

    /// 转入终态
    fn finish(&mut self, reason: EndReason) {
        self.phase = Phase::GameOver;
        self.end = Some(reason);
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
