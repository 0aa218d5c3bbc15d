use super::tile::{sort_tiles, Tile};
use smallvec::SmallVec;

/// 胡牌判定器
///
/// 对暗牌序列做递归回溯分解：一个对子 + 若干组刻子/顺子。
/// 暗牌最多 13 张，分支数量很小，不需要缓存（纯函数，无共享状态）。
pub struct WinChecker;

impl WinChecker {
    /// 判定是否构成胡牌
    ///
    /// # 参数
    ///
    /// - `concealed`: 暗牌（含刚摸到或要胡的那张）
    /// - `meld_count`: 已亮出的碰/杠组数，每组占 3 个逻辑名额
    ///
    /// # 算法
    ///
    /// 总逻辑牌数必须为 14。对排序后的暗牌，枚举每一种相邻相同的
    /// 对子，移除后递归分解剩余部分：取最小的一张作牌头，分支尝试
    /// "牌头组成刻子" 和 "牌头作为顺子最小张"，任一分支清空剩余
    /// 即胡牌。
    pub fn is_winning(concealed: &[Tile], meld_count: usize) -> bool {
        if concealed.len() + meld_count * 3 != 14 {
            return false;
        }

        let mut tiles: SmallVec<[Tile; 14]> = SmallVec::from_slice(concealed);
        sort_tiles(&mut tiles);

        // 枚举对子候选（同一种牌只试一次）
        for i in 0..tiles.len().saturating_sub(1) {
            if tiles[i] != tiles[i + 1] {
                continue;
            }
            if i > 0 && tiles[i - 1] == tiles[i] {
                continue;
            }

            let mut rest: SmallVec<[Tile; 12]> = SmallVec::new();
            rest.extend_from_slice(&tiles[..i]);
            rest.extend_from_slice(&tiles[i + 2..]);

            if Self::decompose(&rest) {
                return true;
            }
        }

        false
    }

    /// 递归分解：剩余牌能否全部拆成刻子/顺子
    ///
    /// 输入必须有序；牌头（最小的一张）只能属于以它开头的刻子或
    /// 顺子，所以只需要这两个分支。
    fn decompose(tiles: &[Tile]) -> bool {
        if tiles.is_empty() {
            return true;
        }
        if tiles.len() % 3 != 0 {
            return false;
        }

        let head = tiles[0];

        // 分支一：牌头组成刻子
        if tiles.len() >= 3 && tiles[1] == head && tiles[2] == head && Self::decompose(&tiles[3..])
        {
            return true;
        }

        // 分支二：牌头作为顺子的最小张（9 之后没有下一张，不回绕）
        if let Some(second) = head.successor() {
            if let Some(third) = second.successor() {
                let pos2 = tiles.iter().position(|t| *t == second);
                let pos3 = tiles.iter().position(|t| *t == third);
                if let (Some(p2), Some(p3)) = (pos2, pos3) {
                    let mut rest: SmallVec<[Tile; 12]> = SmallVec::new();
                    for (i, t) in tiles.iter().enumerate() {
                        if i == 0 || i == p2 || i == p3 {
                            continue;
                        }
                        rest.push(*t);
                    }
                    if Self::decompose(&rest) {
                        return true;
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_win_full_hand() {
        // 11 + 234万 + 567万 + 234条 + 555筒
        let tiles = vec![
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(2),
            Tile::Wan(3),
            Tile::Wan(4),
            Tile::Wan(5),
            Tile::Wan(6),
            Tile::Wan(7),
            Tile::Tong(5),
            Tile::Tong(5),
            Tile::Tong(5),
            Tile::Tiao(2),
            Tile::Tiao(3),
            Tile::Tiao(4),
        ];
        assert!(WinChecker::is_winning(&tiles, 0));
    }

    #[test]
    fn test_interleaved_runs_win() {
        // 两组碰杠在外，暗牌 8 张：99筒 作对，112233万 拆成两组顺子。
        // 交错的顺子要求回溯不能只看相邻三张。
        let tiles = vec![
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(2),
            Tile::Wan(2),
            Tile::Wan(3),
            Tile::Wan(3),
            Tile::Tong(9),
            Tile::Tong(9),
        ];
        assert!(WinChecker::is_winning(&tiles, 2));
    }

    #[test]
    fn test_all_triplets_win() {
        // 111 222 333 万 + 44 条，一组碰杠在外
        let tiles = vec![
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(2),
            Tile::Wan(2),
            Tile::Wan(2),
            Tile::Wan(3),
            Tile::Wan(3),
            Tile::Wan(3),
            Tile::Tiao(4),
            Tile::Tiao(4),
        ];
        assert!(WinChecker::is_winning(&tiles, 1));
    }

    #[test]
    fn test_pair_only_after_melds() {
        // 四组碰杠在外，暗牌只剩一对（金钩钓式单吊）
        let tiles = vec![Tile::Tong(7), Tile::Tong(7)];
        assert!(WinChecker::is_winning(&tiles, 4));
    }

    #[test]
    fn test_rejects_wrong_total() {
        // 13 张、无碰杠：牌数不对，直接拒绝
        let tiles = vec![
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(2),
            Tile::Wan(3),
            Tile::Wan(4),
            Tile::Wan(5),
            Tile::Wan(6),
            Tile::Wan(7),
            Tile::Tong(5),
            Tile::Tong(5),
            Tile::Tong(5),
            Tile::Tiao(2),
            Tile::Tiao(3),
        ];
        assert!(!WinChecker::is_winning(&tiles, 0));
    }

    #[test]
    fn test_rejects_no_decomposition() {
        // 任何对子移除后剩余都拆不干净
        let tiles = vec![
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(1),
            Tile::Wan(2),
            Tile::Wan(2),
            Tile::Wan(2),
            Tile::Wan(3),
            Tile::Wan(3),
            Tile::Wan(3),
            Tile::Wan(5),
            Tile::Tiao(9),
        ];
        assert!(!WinChecker::is_winning(&tiles, 1));
    }

    #[test]
    fn test_rejects_run_across_suits() {
        // 8万9万 + 1筒 不构成顺子
        let tiles = vec![
            Tile::Wan(8),
            Tile::Wan(9),
            Tile::Tong(1),
            Tile::Tong(2),
            Tile::Tong(2),
        ];
        assert!(!WinChecker::is_winning(&tiles, 3));
    }

    #[test]
    fn test_rejects_wraparound_run() {
        // 891 不回绕成顺子
        let tiles = vec![
            Tile::Wan(8),
            Tile::Wan(9),
            Tile::Wan(1),
            Tile::Tiao(3),
            Tile::Tiao(3),
        ];
        assert!(!WinChecker::is_winning(&tiles, 3));
    }

    #[test]
    fn test_no_pair_rejected() {
        // 没有对子可用
        let tiles = vec![
            Tile::Wan(1),
            Tile::Wan(2),
            Tile::Wan(3),
            Tile::Tong(4),
            Tile::Tong(5),
        ];
        assert!(!WinChecker::is_winning(&tiles, 3));
    }

    #[test]
    fn test_order_independent() {
        // 输入乱序也能判定（内部会先理牌）
        let tiles = vec![
            Tile::Tiao(4),
            Tile::Wan(1),
            Tile::Tong(5),
            Tile::Wan(3),
            Tile::Tiao(2),
            Tile::Wan(2),
            Tile::Tong(5),
            Tile::Wan(1),
            Tile::Tiao(3),
            Tile::Wan(5),
            Tile::Tong(5),
            Tile::Wan(7),
            Tile::Wan(6),
            Tile::Wan(4),
        ];
        assert!(WinChecker::is_winning(&tiles, 0));
    }
}
