use super::parse::parse_into_seven_pairs_win;
use crate::model::*;

// [和了形判定]

// 和牌: 手牌+副露触及的花色不超过两门, 且为七对形或通常形
pub fn is_complete(hand: &TileTable, melds: &[Meld]) -> bool {
    if suit_mask(hand, melds).count_ones() > 2 {
        return false;
    }
    (melds.is_empty() && is_seven_pairs_win(hand)) || is_normal_win(hand)
}

// 七对形: 无副露14张, 每个数字都凑成对
pub fn is_seven_pairs_win(hand: &TileTable) -> bool {
    !parse_into_seven_pairs_win(hand).is_empty()
}

// 通常形: 雀头 + 若干面子 (副露已是完成面子, 不参与分解)
pub fn is_normal_win(hand: &TileTable) -> bool {
    !possible_eyes(hand).is_empty()
}

// 和牌形手牌的雀头候选列表: 摘除一对后剩余能完全分解为面子的所有牌
// 非和牌形时返回空列表
pub fn possible_eyes(hand: &TileTable) -> Vec<Tile> {
    if count_tiles(hand) % 3 != 2 {
        return vec![];
    }
    let mut res = vec![];
    let mut hand = *hand;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if hand[ti][ni] >= 2 {
                hand[ti][ni] -= 2;
                if decompose_sets(&mut hand, 0) {
                    res.push(Tile(ti, ni));
                }
                hand[ti][ni] += 2;
            }
        }
    }
    res
}

// 去掉雀头后的剩余牌能否完全分解为刻子/顺子
fn decompose_sets(hand: &mut TileTable, mut id: Index) -> bool {
    while id < TILE_KIND {
        let Tile(ti, ni) = Tile::from_id(id);
        if hand[ti][ni] > 0 {
            break;
        }
        id += 1;
    }
    if id == TILE_KIND {
        return true;
    }

    let Tile(ti, ni) = Tile::from_id(id);

    // 刻子
    if hand[ti][ni] >= 3 {
        hand[ti][ni] -= 3;
        let ok = decompose_sets(hand, id);
        hand[ti][ni] += 3;
        if ok {
            return true;
        }
    }

    // 顺子
    if ni + 2 < TNUM && hand[ti][ni + 1] > 0 && hand[ti][ni + 2] > 0 {
        hand[ti][ni] -= 1;
        hand[ti][ni + 1] -= 1;
        hand[ti][ni + 2] -= 1;
        let ok = decompose_sets(hand, id);
        hand[ti][ni] += 1;
        hand[ti][ni + 1] += 1;
        hand[ti][ni + 2] += 1;
        if ok {
            return true;
        }
    }

    false
}

// [和了牌判定]
// 再摸一张即和牌的所有牌, 未听牌时返回空列表
// 只看牌形, 不检查该牌剩余张数 (持有4张时的单钓也计入)
pub fn completing_tiles(hand: &TileTable, melds: &[Meld]) -> Vec<Tile> {
    let mut res = vec![];
    let mut hand = *hand;
    for id in 0..TILE_KIND {
        let Tile(ti, ni) = Tile::from_id(id);
        hand[ti][ni] += 1;
        if is_complete(&hand, melds) {
            res.push(Tile(ti, ni));
        }
        hand[ti][ni] -= 1;
    }
    res
}

#[test]
fn test_is_complete_normal() {
    use super::common::{meld_from_string, tile_table_from_string};
    let tt = tile_table_from_string("123456789m99s").unwrap();
    assert!(is_complete(&tt, &[]));
    let tt = tile_table_from_string("123m55p").unwrap();
    assert!(is_complete(&tt, &[]));
    let tt = tile_table_from_string("1234567m1234567p").unwrap();
    assert!(!is_complete(&tt, &[]));

    // 金钩钓: 四副露 + 单钓对子
    let tt = tile_table_from_string("99s").unwrap();
    let melds = [
        meld_from_string("111m").unwrap(),
        meld_from_string("222m").unwrap(),
        meld_from_string("333m").unwrap(),
        meld_from_string("4444m").unwrap(),
    ];
    assert!(is_complete(&tt, &melds));

    // 三门花色不能和
    let tt = tile_table_from_string("123m456s789p1s").unwrap();
    assert!(!is_complete(&tt, &[]));
    let tt = tile_table_from_string("123456m99s").unwrap();
    let melds = [meld_from_string("555p").unwrap()];
    assert!(!is_complete(&tt, &melds));
}

#[test]
fn test_is_complete_seven_pairs() {
    use super::common::{meld_from_string, tile_table_from_string};
    let tt = tile_table_from_string("11223344556677p").unwrap();
    assert!(is_complete(&tt, &[]));
    assert!(is_seven_pairs_win(&tt));

    // 龙七对: 4张算两对
    let tt = tile_table_from_string("11112233445566m").unwrap();
    assert!(is_seven_pairs_win(&tt));
    assert!(is_complete(&tt, &[]));

    // 两门的七对
    let tt = tile_table_from_string("112233445566m77p").unwrap();
    assert!(is_complete(&tt, &[]));

    // 13张 / 含单张的14张都不是七对
    let tt = tile_table_from_string("1122334455667m").unwrap();
    assert!(!is_seven_pairs_win(&tt));
    let tt = tile_table_from_string("11122334455667m").unwrap();
    assert!(!is_seven_pairs_win(&tt));

    // 有副露时不走七对形
    let tt = tile_table_from_string("1122334455s").unwrap();
    let melds = [meld_from_string("777s").unwrap()];
    assert!(!is_complete(&tt, &melds));
}

#[test]
fn test_completing_tiles() {
    use super::common::tile_table_from_string;
    let tt = tile_table_from_string("123456789m9s").unwrap();
    assert_eq!(completing_tiles(&tt, &[]), vec![Tile(TS, 9)]);

    // 纯正九莲宝灯形: 九面听
    let tt = tile_table_from_string("1112345678999m").unwrap();
    let wins: Vec<Tile> = (1..TNUM).map(|ni| Tile(TM, ni)).collect();
    assert_eq!(completing_tiles(&tt, &[]), wins);

    // 已和牌的手不再有和牌张 (3n+2张加一张后不成形)
    let tt = tile_table_from_string("123456789m99s").unwrap();
    assert_eq!(completing_tiles(&tt, &[]), vec![]);

    // 两种形各自成立的听牌: 1m和4m听通常形, 7m两形皆可
    let tt = tile_table_from_string("1122334455667m").unwrap();
    assert_eq!(
        completing_tiles(&tt, &[]),
        vec![Tile(TM, 1), Tile(TM, 4), Tile(TM, 7)]
    );

    // 只靠七对形的听牌
    let tt = tile_table_from_string("11447799m22588p").unwrap();
    assert_eq!(completing_tiles(&tt, &[]), vec![Tile(TP, 5)]);
}
