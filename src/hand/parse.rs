use smallvec::{smallvec, SmallVec};

use crate::model::*;
use crate::util::misc::cartesian_product;

use super::win::possible_eyes;

use SetPairType::*;

#[derive(Debug, Clone, Copy)]
pub enum SetPairType {
    Pair,     // 雀头
    Shunzi,   // 顺子
    Kezi,     // 暗刻
    Peng,     // 碰
    Minggang, // 明杠
    Bugang,   // 补杠
}

// Tile在顺子的场合为起始牌
#[derive(Debug, Clone, Copy)]
pub struct SetPair(pub SetPairType, pub Tile);

// 一种和牌拆分, 七对形时为七组
pub type ParsedHand = SmallVec<[SetPair; 7]>;

// 副露转换为SetPair列表
pub fn parse_melds(melds: &[Meld]) -> ParsedHand {
    let mut res = smallvec![];
    for m in melds {
        res.push(match m.meld_type {
            MeldType::Peng => SetPair(Peng, m.tile),
            MeldType::Minggang => SetPair(Minggang, m.tile),
            MeldType::Bugang => SetPair(Bugang, m.tile),
        });
    }
    res
}

// 单门牌分解为顺子与刻子
// 三连刻存在2种拆分(刻子3个, 顺子3个), 两种都返回
// 预先需确认该门可以分解(不可分解时assert失败)
// TileRow为空(全0)时视为可分解, 返回[[]]
fn parse_row_into_sets(tr: &TileRow, ti: Type) -> Vec<ParsedHand> {
    let mut ph: ParsedHand = smallvec![];
    let (mut n0, mut n1, mut n2);

    n0 = tr[1];
    n1 = tr[2];
    for i in 1..8 {
        n2 = tr[i + 2];

        // 刻子
        if n0 >= 3 {
            ph.push(SetPair(Kezi, Tile(ti, i)));
        }

        // 顺子
        let n = n0 % 3;
        for _ in 0..n {
            ph.push(SetPair(Shunzi, Tile(ti, i)));
        }
        n0 = n1 - n;
        n1 = n2 - n;
    }
    if n0 == 3 {
        ph.push(SetPair(Kezi, Tile(ti, 8)));
    }
    if n1 == 3 {
        ph.push(SetPair(Kezi, Tile(ti, 9)));
    }
    assert!(n0 % 3 == 0 && n1 % 3 == 0);

    if ph.len() < 3 {
        return vec![ph];
    }

    // 三连刻检查
    let (mut i, mut n) = (0, 0);
    for SetPair(tp, t) in &ph {
        if let Kezi = tp {
            if i + n == t.1 {
                n += 1;
                if n == 3 {
                    break;
                }
            } else {
                i = t.1;
                n = 1;
            }
        }
    }

    // 无三连刻
    if n != 3 {
        return vec![ph];
    }

    let mut ph2: ParsedHand = smallvec![];
    for &SetPair(tp, t) in &ph {
        if let Kezi = tp {
            if i <= t.1 && t.1 < i + 3 {
                continue;
            }
        }
        ph2.push(SetPair(tp, t));
    }
    let sp = SetPair(Shunzi, Tile(ti, i));
    ph2.push(sp);
    ph2.push(sp);
    ph2.push(sp);

    vec![ph, ph2]
}

// 手牌为通常和牌形时返回所有"面子+雀头"拆分, 否则返回空列表
pub fn parse_into_normal_win(hand: &TileTable) -> Vec<ParsedHand> {
    let eyes = possible_eyes(hand);
    if eyes.is_empty() {
        return vec![];
    }

    let mut phs_list = vec![];

    // 含雀头的一门 (和牌形的雀头候选必定同门)
    let eyes_ti = eyes[0].0;
    let mut tr = hand[eyes_ti];
    let mut phs = vec![];
    for pair in eyes {
        tr[pair.1] -= 2;
        let mut phs2 = parse_row_into_sets(&tr, eyes_ti);
        tr[pair.1] += 2;
        for ph in &mut phs2 {
            ph.push(SetPair(Pair, pair));
        }
        phs.append(&mut phs2);
    }
    phs_list.push(phs);

    // 不含雀头的各门
    for ti in 0..TYPE {
        if ti != eyes_ti {
            phs_list.push(parse_row_into_sets(&hand[ti], ti));
        }
    }

    // 各门拆分的所有组合(直积)
    let mut res = vec![];
    for v in cartesian_product(&phs_list) {
        let mut ph: ParsedHand = smallvec![];
        for v2 in v {
            ph.extend_from_slice(v2);
        }
        res.push(ph);
    }

    res
}

// 手牌为七对和牌形时返回全对子拆分, 否则返回空列表
// 4张同牌拆成两个相同对子, 龙七对由此成立
pub fn parse_into_seven_pairs_win(hand: &TileTable) -> Vec<ParsedHand> {
    let mut res: ParsedHand = smallvec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            match hand[ti][ni] {
                0 => {}
                2 => res.push(SetPair(Pair, Tile(ti, ni))),
                4 => {
                    res.push(SetPair(Pair, Tile(ti, ni)));
                    res.push(SetPair(Pair, Tile(ti, ni)));
                }
                _ => return vec![],
            }
        }
    }

    if res.len() == 7 {
        vec![res]
    } else {
        vec![]
    }
}
