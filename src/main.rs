/// 可执行文件入口（用于测试和调试）
///
/// 开一局，四家按最简单的策略打到终局：能胡就胡，其余响应一律过，
/// 出牌永远打手牌第一张。

use sichuan_mahjong::{Phase, Seat, TurnEngine};

fn main() {
    let mut engine = TurnEngine::new();
    engine.start_new_game();

    let info = engine.game_info();
    println!(
        "第 {} 局开始，庄家：{}，牌墙剩余：{} 张",
        info.round, info.dealer, info.remaining_tiles
    );

    for seat in Seat::ALL {
        print!("{}家起手：", seat);
        for tile in engine.hand(seat) {
            print!("{} ", tile);
        }
        println!();
    }

    while engine.phase() != Phase::GameOver {
        match engine.phase() {
            Phase::Playing => {
                if engine.discard(0).is_err() {
                    break;
                }
            }
            Phase::WaitingAction => {
                for seat in Seat::ALL {
                    let view = engine.player_view(seat);
                    if view.may_hu && engine.claim_win(seat).is_ok() {
                        break;
                    }
                    engine.pass(seat);
                }
            }
            _ => break,
        }
    }

    match engine.winner() {
        Some(seat) => println!("游戏结束：{}家胡牌！", seat),
        None => println!("游戏结束：流局（牌墙剩余 {} 张）", engine.remaining_tiles()),
    }
}
