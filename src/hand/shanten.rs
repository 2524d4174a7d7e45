use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::debug;
use crate::model::*;

// 手牌+副露跨三门时的向听数, 此时无论怎么换牌都无法和牌
pub const SHANTEN_UNREACHABLE: u32 = u32::MAX;

const SHANTEN_CACHE_LIMIT: usize = 65536;

// 向听数缓存: 键为手牌计数表 + 副露数
// 花色门数校验在查缓存之前完成, 因此副露的具体花色不影响缓存值
static SHANTEN_CACHE: OnceLock<Mutex<HashMap<(TileTable, usize), u32>>> = OnceLock::new();

// 向听数: 0为听牌或已和牌, 越大离和牌越远
pub fn shanten(hand: &TileTable, melds: &[Meld]) -> u32 {
    if suit_mask(hand, melds).count_ones() > 2 {
        return SHANTEN_UNREACHABLE;
    }

    let cache = SHANTEN_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let key = (*hand, melds.len());
    if let Some(&s) = cache.lock().unwrap().get(&key) {
        return s;
    }

    let s = standard_shanten(hand).min(seven_pairs_shanten(hand, melds));

    let mut cache = cache.lock().unwrap();
    if cache.len() >= SHANTEN_CACHE_LIMIT {
        debug!("shanten cache cleared at {} entries", cache.len());
        cache.clear();
    }
    cache.insert(key, s);
    s
}

// 七对形向听数: 每凑一对少一步, 4张算两对, 已和牌时饱和为0
pub fn seven_pairs_shanten(hand: &TileTable, melds: &[Meld]) -> u32 {
    if !melds.is_empty() {
        return SHANTEN_UNREACHABLE;
    }
    let mut credits = 0;
    for tr in hand {
        for &c in &tr[1..] {
            credits += c / 2;
        }
    }
    6u32.saturating_sub(credits as u32)
}

// 通常形向听数: 对每个雀头候选(含无雀头情形)做回溯搜索取最小
pub fn standard_shanten(hand: &TileTable) -> u32 {
    // 手牌自身还需要凑出的面子数 (13/14张为4, 每副露一组少3张减1)
    let need = count_tiles(hand) / 3;
    let mut hand = *hand;
    let mut best = walk(&mut hand, 0, 0, 0, need, false);
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if hand[ti][ni] >= 2 {
                hand[ti][ni] -= 2;
                best = best.min(walk(&mut hand, 0, 0, 0, need, true));
                hand[ti][ni] += 2;
            }
        }
    }
    best
}

// 自左向右回溯枚举 刻子/顺子/搭子/孤张 的所有拆分
fn walk(
    hand: &mut TileTable,
    mut id: Index,
    melds: usize,
    partials: usize,
    need: usize,
    has_eyes: bool,
) -> u32 {
    while id < TILE_KIND {
        let Tile(ti, ni) = Tile::from_id(id);
        if hand[ti][ni] > 0 {
            break;
        }
        id += 1;
    }
    if id == TILE_KIND {
        let lack = need - melds;
        let s = 2 * lack as i32 - partials.min(lack) as i32 - has_eyes as i32;
        return s.max(0) as u32;
    }

    let Tile(ti, ni) = Tile::from_id(id);
    let mut best = SHANTEN_UNREACHABLE;

    if melds < need {
        // 刻子
        if hand[ti][ni] >= 3 {
            hand[ti][ni] -= 3;
            best = best.min(walk(hand, id, melds + 1, partials, need, has_eyes));
            hand[ti][ni] += 3;
        }
        // 顺子
        if ni + 2 < TNUM && hand[ti][ni + 1] > 0 && hand[ti][ni + 2] > 0 {
            hand[ti][ni] -= 1;
            hand[ti][ni + 1] -= 1;
            hand[ti][ni + 2] -= 1;
            best = best.min(walk(hand, id, melds + 1, partials, need, has_eyes));
            hand[ti][ni] += 1;
            hand[ti][ni + 1] += 1;
            hand[ti][ni + 2] += 1;
        }
    }

    if melds + partials < need {
        // 对子搭子
        if hand[ti][ni] >= 2 {
            hand[ti][ni] -= 2;
            best = best.min(walk(hand, id, melds, partials + 1, need, has_eyes));
            hand[ti][ni] += 2;
        }
        // 两面搭子
        if ni + 1 < TNUM && hand[ti][ni + 1] > 0 {
            hand[ti][ni] -= 1;
            hand[ti][ni + 1] -= 1;
            best = best.min(walk(hand, id, melds, partials + 1, need, has_eyes));
            hand[ti][ni] += 1;
            hand[ti][ni + 1] += 1;
        }
        // 嵌张搭子
        if ni + 2 < TNUM && hand[ti][ni + 2] > 0 {
            hand[ti][ni] -= 1;
            hand[ti][ni + 2] -= 1;
            best = best.min(walk(hand, id, melds, partials + 1, need, has_eyes));
            hand[ti][ni] += 1;
            hand[ti][ni + 2] += 1;
        }
    }

    // 孤张: 该数字剩余的牌全部弃用
    let c = hand[ti][ni];
    hand[ti][ni] = 0;
    best = best.min(walk(hand, id + 1, melds, partials, need, has_eyes));
    hand[ti][ni] = c;

    best
}

// [有效牌判定]
// 摸入后向听数严格减少的所有牌; 已和牌或跨三门时返回空列表
pub fn effective_tiles(hand: &TileTable, melds: &[Meld]) -> Vec<Tile> {
    let base = shanten(hand, melds);
    let mut res = vec![];
    let mut hand = *hand;
    for id in 0..TILE_KIND {
        let Tile(ti, ni) = Tile::from_id(id);
        hand[ti][ni] += 1;
        if shanten(&hand, melds) < base {
            res.push(Tile(ti, ni));
        }
        hand[ti][ni] -= 1;
    }
    res
}

#[test]
fn test_shanten_complete_and_tenpai() {
    use super::common::{meld_from_string, tile_table_from_string};
    let tt = tile_table_from_string("123456789m99s").unwrap();
    assert_eq!(shanten(&tt, &[]), 0);
    let tt = tile_table_from_string("123456789m9s").unwrap();
    assert_eq!(shanten(&tt, &[]), 0);
    let tt = tile_table_from_string("1112345678999m").unwrap();
    assert_eq!(shanten(&tt, &[]), 0);

    // 金钩钓的单钓与完成
    let melds = [
        meld_from_string("111m").unwrap(),
        meld_from_string("222m").unwrap(),
        meld_from_string("333m").unwrap(),
        meld_from_string("4444m").unwrap(),
    ];
    let tt = tile_table_from_string("9s").unwrap();
    assert_eq!(shanten(&tt, &melds), 0);
    let tt = tile_table_from_string("99s").unwrap();
    assert_eq!(shanten(&tt, &melds), 0);
}

#[test]
fn test_shanten_counts() {
    use super::common::tile_table_from_string;
    let tt = tile_table_from_string("12345678m95s").unwrap();
    assert_eq!(shanten(&tt, &[]), 1);
    let tt = tile_table_from_string("1234589m2458p").unwrap();
    assert_eq!(shanten(&tt, &[]), 2);
    let tt = tile_table_from_string("159m159p5s").unwrap();
    assert_eq!(shanten(&tt, &[]), SHANTEN_UNREACHABLE);
    let tt = tile_table_from_string("123m456s789p1s").unwrap();
    assert_eq!(shanten(&tt, &[]), SHANTEN_UNREACHABLE);
}

#[test]
fn test_seven_pairs_shanten() {
    use super::common::{meld_from_string, tile_table_from_string};
    let tt = tile_table_from_string("1122334455m1122p").unwrap();
    assert_eq!(shanten(&tt, &[]), 0);
    let tt = tile_table_from_string("1122334455m112p").unwrap();
    assert_eq!(shanten(&tt, &[]), 0);
    let tt = tile_table_from_string("11335579m22446p").unwrap();
    assert_eq!(seven_pairs_shanten(&tt, &[]), 1);

    // 4张算两对
    let tt = tile_table_from_string("11112233445566m").unwrap();
    assert_eq!(seven_pairs_shanten(&tt, &[]), 0);
    let tt = tile_table_from_string("1111223344556m").unwrap();
    assert_eq!(shanten(&tt, &[]), 0);

    // 有副露时七对形不可用
    let tt = tile_table_from_string("1122334455s").unwrap();
    let melds = [meld_from_string("777s").unwrap()];
    assert_eq!(seven_pairs_shanten(&tt, &melds), SHANTEN_UNREACHABLE);
}

#[test]
fn test_effective_tiles() {
    use super::common::tile_table_from_string;
    let tt = tile_table_from_string("12345678m95s").unwrap();
    assert_eq!(
        effective_tiles(&tt, &[]),
        vec![
            Tile(TM, 3),
            Tile(TM, 6),
            Tile(TM, 9),
            Tile(TS, 5),
            Tile(TS, 9)
        ]
    );

    // 已听牌的手: 摸入和牌张后向听数仍为0, 不构成严格减少
    let tt = tile_table_from_string("123456789m9s").unwrap();
    assert_eq!(effective_tiles(&tt, &[]), vec![]);

    // 跨三门时没有有效牌
    let tt = tile_table_from_string("123m456s789p1s").unwrap();
    assert_eq!(effective_tiles(&tt, &[]), vec![]);
}

#[test]
fn test_shanten_random_hands() {
    use super::win::{completing_tiles, is_complete};
    use rand::prelude::*;

    let mut wall = vec![];
    for ti in [TM, TS] {
        for ni in 1..TNUM {
            for _ in 0..TILE {
                wall.push(Tile(ti, ni));
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..300 {
        wall.shuffle(&mut rng);
        let mut hand = TileTable::default();
        for &Tile(ti, ni) in &wall[..13] {
            hand[ti][ni] += 1;
        }

        // 13张的手: 向听数为0当且仅当存在和牌张
        let s = shanten(&hand, &[]);
        assert!(!is_complete(&hand, &[]));
        assert_eq!(s == 0, !completing_tiles(&hand, &[]).is_empty());

        // 摸入墙内任意一张都不会让向听数变大 (第三门会触发缺门哨兵, 不在此列)
        for ti in [TM, TS] {
            for ni in 1..TNUM {
                if hand[ti][ni] == TILE {
                    continue;
                }
                hand[ti][ni] += 1;
                assert!(shanten(&hand, &[]) <= s);
                hand[ti][ni] -= 1;
            }
        }
    }
}
