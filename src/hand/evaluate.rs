use serde::{Deserialize, Serialize};

use super::fan::FanContext;
use super::parse::*;
use crate::model::*;

// 算番结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub multiplier: u64,       // 最终倍数
    pub patterns: Vec<String>, // 番名列表 (主番, 状态标志, N根)
}

// 对和牌的每种拆分算番, 返回倍数最高者
// 不是和牌形时退化为只含副露的保底解释, 此函数不会失败
pub fn score(hand: &TileTable, melds: &[Meld], ctx: &WinContext) -> ScoreResult {
    let pm = parse_melds(melds);

    let mut phs = parse_into_normal_win(hand);
    if melds.is_empty() {
        phs.append(&mut parse_into_seven_pairs_win(hand));
    }

    let mut results = vec![];
    for mut ph in phs.into_iter() {
        ph.extend_from_slice(&pm);
        match ph.len() {
            5 | 7 => {} // 通常形, 七对形
            _ => continue, // 牌数不足整手的拆分不参与算番
        }
        results.push(FanContext::new(ph, *ctx).calc_fan());
    }

    results.sort_by_key(|r| r.0);
    let (multiplier, patterns) = match results.pop() {
        Some(r) => r,
        None => FanContext::new(pm, *ctx).calc_fan(),
    };

    ScoreResult {
        multiplier,
        patterns,
    }
}

#[test]
fn test_score_basic() {
    use super::common::tile_table_from_string;
    let tt = tile_table_from_string("112233456789m99s").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 1);
    assert_eq!(res.patterns, vec!["平胡"]);

    // 未和牌的手也返回保底结果
    let tt = tile_table_from_string("123456789m12s").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 1);
    assert_eq!(res.patterns, vec!["平胡"]);
}

#[test]
fn test_score_flags_stack() {
    use super::common::{meld_from_string, tile_table_from_string};
    let tt = tile_table_from_string("112233456789m99s").unwrap();
    let flags = WinFlags {
        zimo: true,
        gang_kai: true,
        ..Default::default()
    };
    let ctx = WinContext::new(&tt, &[], flags);
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 4);
    assert_eq!(res.patterns, vec!["平胡", "自摸", "杠上开花"]);

    // 状态标志与根同时翻倍
    let tt = tile_table_from_string("123456m23499s").unwrap();
    let melds = [meld_from_string("7777s+2").unwrap()];
    let flags = WinFlags {
        zimo: true,
        ..Default::default()
    };
    let ctx = WinContext::new(&tt, &melds, flags);
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 4);
    assert_eq!(res.patterns, vec!["平胡", "自摸", "1根"]);
}

#[test]
fn test_score_seven_pairs_family() {
    use super::common::tile_table_from_string;
    let tt = tile_table_from_string("11223344556677p").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 16);
    assert_eq!(res.patterns, vec!["清七对"]);

    let flags = WinFlags {
        zimo: true,
        ..Default::default()
    };
    let ctx = WinContext::new(&tt, &[], flags);
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 32);
    assert_eq!(res.patterns, vec!["清七对", "自摸"]);

    // 带4张的单门七对: 清龙七对, 基础倍数已含这一根, 不再另算
    let tt = tile_table_from_string("11112233445566m").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    assert_eq!(ctx.gen_count, 1);
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 32);
    assert_eq!(res.patterns, vec!["清龙七对"]);

    // 两门时退为龙七对
    let tt = tile_table_from_string("111122334455m66p").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    assert_eq!(ctx.gen_count, 1);
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 8);
    assert_eq!(res.patterns, vec!["龙七对"]);

    // 两门的七对
    let tt = tile_table_from_string("112233445566m77p").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 4);
    assert_eq!(res.patterns, vec!["七对"]);
}

#[test]
fn test_score_triplet_family() {
    use super::common::{meld_from_string, tile_table_from_string};

    // 清对: 全刻子 + 清一色
    let tt = tile_table_from_string("11122299m").unwrap();
    let melds = [
        meld_from_string("555m+1").unwrap(),
        meld_from_string("777m+2").unwrap(),
    ];
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 8);
    assert_eq!(res.patterns, vec!["清对"]);

    // 同一手牌改为开杠, 多出一根翻一倍
    let melds = [
        meld_from_string("5555m+1").unwrap(),
        meld_from_string("777m+2").unwrap(),
    ];
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 16);
    assert_eq!(res.patterns, vec!["清对", "1根"]);

    // 将对: 全2/5/8的对对胡
    let tt = tile_table_from_string("22255888s").unwrap();
    let melds = [
        meld_from_string("555p+1").unwrap(),
        meld_from_string("888p+3").unwrap(),
    ];
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 8);
    assert_eq!(res.patterns, vec!["将对"]);
}

#[test]
fn test_score_best_decomposition() {
    use super::common::tile_table_from_string;

    // 三连刻改读为三个相同顺子: 幺九(4)高于对对胡(2)
    let tt = tile_table_from_string("111222333999m99s").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 4);
    assert_eq!(res.patterns, vec!["幺九"]);

    // 刻子读法更高的场合: 清对(8)而非清一色(4)
    let tt = tile_table_from_string("11122233344555m").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 8);
    assert_eq!(res.patterns, vec!["清对"]);
}

#[test]
fn test_score_jin_gou_diao() {
    use super::common::{meld_from_string, tile_table_from_string};
    let melds = [
        meld_from_string("111m+1").unwrap(),
        meld_from_string("222m+2").unwrap(),
        meld_from_string("333m+3").unwrap(),
        meld_from_string("4444m+1").unwrap(),
    ];
    let tt = tile_table_from_string("99s").unwrap();
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 8);
    assert_eq!(res.patterns, vec!["金钩钓", "1根"]);

    // 雀头同门时升级为清金钩钓
    let tt = tile_table_from_string("99m").unwrap();
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 32);
    assert_eq!(res.patterns, vec!["清金钩钓", "1根"]);
}

#[test]
fn test_score_shi_ba_luo_han() {
    use super::common::{meld_from_string, tile_table_from_string};
    let melds = [
        meld_from_string("1111m+1").unwrap(),
        meld_from_string("2222m+2").unwrap(),
        meld_from_string("3333m+3").unwrap(),
        meld_from_string("9999s+1").unwrap(),
    ];
    let tt = tile_table_from_string("55s").unwrap();
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    assert_eq!(ctx.gen_count, 4);
    let res = score(&tt, &melds, &ctx);

    // 四根已计入十八罗汉的基础倍数
    assert_eq!(res.multiplier, 64);
    assert_eq!(res.patterns, vec!["十八罗汉"]);

    let melds = [
        meld_from_string("1111m+1").unwrap(),
        meld_from_string("2222m+2").unwrap(),
        meld_from_string("3333m+3").unwrap(),
        meld_from_string("4444m+1").unwrap(),
    ];
    let tt = tile_table_from_string("99m").unwrap();
    let ctx = WinContext::new(&tt, &melds, WinFlags::default());
    let res = score(&tt, &melds, &ctx);
    assert_eq!(res.multiplier, 256);
    assert_eq!(res.patterns, vec!["清十八罗汉"]);
}

#[test]
fn test_score_yao_jiu() {
    use super::common::tile_table_from_string;
    let tt = tile_table_from_string("11112233789999m").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    assert_eq!(ctx.gen_count, 2);
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 64);
    assert_eq!(res.patterns, vec!["清幺九", "2根"]);

    // 两门的幺九
    let tt = tile_table_from_string("112233789m11999s").unwrap();
    let ctx = WinContext::new(&tt, &[], WinFlags::default());
    let res = score(&tt, &[], &ctx);
    assert_eq!(res.multiplier, 4);
    assert_eq!(res.patterns, vec!["幺九"]);
}

#[test]
fn test_score_power_of_two_law() {
    use super::common::{meld_from_string, tile_table_from_string};
    use super::fan::base_fan;

    let hands = [
        ("112233456789m99s", vec![]),
        ("11223344556677p", vec![]),
        ("11122299m", vec!["555m+1", "7777m+2"]),
        ("99s", vec!["111m+1", "222m+2", "333m+3", "4444m+1"]),
    ];
    for (exp, meld_exps) in hands {
        let tt = tile_table_from_string(exp).unwrap();
        let melds: Vec<Meld> = meld_exps
            .iter()
            .map(|e| meld_from_string(e).unwrap())
            .collect();
        for bits in 0..64u32 {
            let flags = WinFlags {
                zimo: bits & 1 != 0,
                gang_kai: bits & 2 != 0,
                qiang_gang: bits & 4 != 0,
                hai_di: bits & 8 != 0,
                tian_hu: bits & 16 != 0,
                di_hu: bits & 32 != 0,
            };
            let ctx = WinContext::new(&tt, &melds, flags);
            let res = score(&tt, &melds, &ctx);

            // 主番必须取自番种表, 其余倍数均为2的幂
            let base = base_fan(&res.patterns[0]).unwrap();
            assert_eq!(res.multiplier % base, 0);
            assert!((res.multiplier / base).is_power_of_two());
        }
    }
}

#[test]
fn test_score_result_json() {
    let res = ScoreResult {
        multiplier: 16,
        patterns: vec!["清七对".to_string()],
    };
    let s = serde_json::to_string(&res).unwrap();
    assert_eq!(serde_json::from_str::<ScoreResult>(&s).unwrap(), res);
}
