use std::fmt;

use crate::model::*;

use super::parse::{ParsedHand, SetPair, SetPairType};

use SetPairType::*;

// 一次和牌拆分的算番上下文
#[derive(Debug)]
pub struct FanContext {
    parsed_hand: ParsedHand, // 含副露的所有分组
    win: WinContext,         // 状态标志与根/杠计数
    counts: Counts,          // 分组种类的计数
}

impl FanContext {
    pub fn new(parsed_hand: ParsedHand, win: WinContext) -> Self {
        let counts = count_type(&parsed_hand);
        Self {
            parsed_hand,
            win,
            counts,
        }
    }

    // 返回(最终倍数, 番名列表)
    // 番名顺序: 主番, 各状态标志, N根
    pub fn calc_fan(&self) -> (u64, Vec<String>) {
        let pattern = self.main_pattern();
        let mut fan = pattern.fan;
        let mut names = vec![pattern.name.to_string()];

        let f = &self.win.flags;
        for (name, hit) in [
            ("自摸", f.zimo),
            ("杠上开花", f.gang_kai),
            ("抢杠胡", f.qiang_gang),
            ("海底捞月", f.hai_di),
            ("天胡", f.tian_hu),
            ("地胡", f.di_hu),
        ] {
            if hit {
                fan *= 2;
                names.push(name.to_string());
            }
        }

        // 根: 主番倍数中已计入的部分不再翻倍
        let gen = self.win.gen_count.saturating_sub(pattern.gen);
        if gen > 0 {
            fan <<= gen;
            names.push(format!("{}根", gen));
        }

        (fan, names)
    }

    fn main_pattern(&self) -> &'static FanPattern {
        for p in FAN_PATTERNS {
            if (p.func)(self) {
                return p;
            }
        }
        &FAN_PATTERNS[FAN_PATTERNS.len() - 1]
    }
}

#[derive(Debug, Default)]
struct Counts {
    pair: usize,
    shunzi: usize,
    kezi: usize,
    peng: usize,
    minggang: usize,
    bugang: usize,
    kezi_total: usize, // kezi + peng + minggang + bugang
    gang_total: usize, // minggang + bugang
    meld_total: usize, // peng + minggang + bugang
}

fn count_type(ph: &ParsedHand) -> Counts {
    let mut cnt = Counts::default();
    for SetPair(tp, _) in ph {
        match tp {
            Pair => cnt.pair += 1,
            Shunzi => cnt.shunzi += 1,
            Kezi => cnt.kezi += 1,
            Peng => cnt.peng += 1,
            Minggang => cnt.minggang += 1,
            Bugang => cnt.bugang += 1,
        }
    }
    cnt.kezi_total = cnt.kezi + cnt.peng + cnt.minggang + cnt.bugang;
    cnt.gang_total = cnt.minggang + cnt.bugang;
    cnt.meld_total = cnt.peng + cnt.minggang + cnt.bugang;

    cnt
}

pub struct FanPattern {
    pub name: &'static str,
    pub func: fn(&FanContext) -> bool,
    pub fan: u64,   // 基础倍数
    pub gen: usize, // 基础倍数中已计入的根数
}

impl fmt::Debug for FanPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.name, self.fan, self.gen)
    }
}

macro_rules! fan {
    ($n: expr, $f: expr, $v: expr, $g: expr) => {
        FanPattern {
            name: $n,
            func: $f,
            fan: $v,
            gen: $g,
        }
    };
}

static FAN_PATTERNS: &'static [FanPattern] = &[
    fan!("清十八罗汉", is_qing_shi_ba_luo_han, 256, 4),
    fan!("清双龙七对", is_qing_shuang_long_qi_dui, 64, 2),
    fan!("十八罗汉", is_shi_ba_luo_han, 64, 4),
    fan!("清龙七对", is_qing_long_qi_dui, 32, 1),
    fan!("三龙七对", is_san_long_qi_dui, 32, 3),
    fan!("清七对", is_qing_qi_dui, 16, 0),
    fan!("清金钩钓", is_qing_jin_gou_diao, 16, 0),
    fan!("清幺九", is_qing_yao_jiu, 16, 0),
    fan!("双龙七对", is_shuang_long_qi_dui, 16, 2),
    fan!("龙七对", is_long_qi_dui, 8, 1),
    fan!("清对", is_qing_dui, 8, 0),
    fan!("将对", is_jiang_dui, 8, 0),
    fan!("七对", is_qi_dui, 4, 0),
    fan!("清一色", is_qing_yi_se, 4, 0),
    fan!("金钩钓", is_jin_gou_diao, 4, 0),
    fan!("幺九", is_yao_jiu, 4, 0),
    fan!("对对胡", is_dui_dui_hu, 2, 0),
    fan!("平胡", is_ping_hu, 1, 0),
];

// 主番的取用规则 ===============================================================
// * 表按基础倍数从高到低排列, 第一个命中的番种即为主番
// * 以下番种存在包含关系, 由表的顺序保证只取高者:
//     平胡, 对对胡, 将对, 清对
//     七对, 龙七对, 双龙七对, 三龙七对
//     清七对, 清龙七对, 清双龙七对
//     金钩钓, 清金钩钓, 十八罗汉, 清十八罗汉
//     幺九, 清幺九
// * 超出主番已计入根数的根按每根翻一倍另行累计

// 清十八罗汉
fn is_qing_shi_ba_luo_han(ctx: &FanContext) -> bool {
    ctx.win.single_suit && ctx.counts.gang_total == 4
}

// 清双龙七对
fn is_qing_shuang_long_qi_dui(ctx: &FanContext) -> bool {
    ctx.win.single_suit && is_qi_dui(ctx) && ctx.win.gen_count >= 2
}

// 十八罗汉
fn is_shi_ba_luo_han(ctx: &FanContext) -> bool {
    ctx.counts.gang_total == 4
}

// 清龙七对
fn is_qing_long_qi_dui(ctx: &FanContext) -> bool {
    ctx.win.single_suit && is_qi_dui(ctx) && ctx.win.gen_count >= 1
}

// 三龙七对
fn is_san_long_qi_dui(ctx: &FanContext) -> bool {
    is_qi_dui(ctx) && ctx.win.gen_count >= 3
}

// 清七对
fn is_qing_qi_dui(ctx: &FanContext) -> bool {
    ctx.win.single_suit && is_qi_dui(ctx)
}

// 清金钩钓
fn is_qing_jin_gou_diao(ctx: &FanContext) -> bool {
    ctx.win.single_suit && is_jin_gou_diao(ctx)
}

// 清幺九
fn is_qing_yao_jiu(ctx: &FanContext) -> bool {
    ctx.win.single_suit && is_yao_jiu(ctx)
}

// 双龙七对
fn is_shuang_long_qi_dui(ctx: &FanContext) -> bool {
    is_qi_dui(ctx) && ctx.win.gen_count >= 2
}

// 龙七对
fn is_long_qi_dui(ctx: &FanContext) -> bool {
    is_qi_dui(ctx) && ctx.win.gen_count >= 1
}

// 清对
fn is_qing_dui(ctx: &FanContext) -> bool {
    ctx.win.single_suit && is_dui_dui_hu(ctx)
}

// 将对: 对对胡且所有牌为2/5/8
fn is_jiang_dui(ctx: &FanContext) -> bool {
    if !is_dui_dui_hu(ctx) {
        return false;
    }
    ctx.parsed_hand.iter().all(|SetPair(_, t)| t.is_jiang())
}

// 七对
fn is_qi_dui(ctx: &FanContext) -> bool {
    ctx.parsed_hand.len() == 7
}

// 清一色
fn is_qing_yi_se(ctx: &FanContext) -> bool {
    ctx.win.single_suit
}

// 金钩钓: 四副露, 手牌只剩单钓的雀头
fn is_jin_gou_diao(ctx: &FanContext) -> bool {
    ctx.counts.meld_total == 4
}

// 幺九: 每一组都含1或9
fn is_yao_jiu(ctx: &FanContext) -> bool {
    if ctx.counts.shunzi + ctx.counts.kezi_total == 0 {
        return false;
    }
    for SetPair(tp, t) in &ctx.parsed_hand {
        match tp {
            Shunzi => {
                if t.1 != 1 && t.1 != 7 {
                    return false;
                }
            }
            _ => {
                if !t.is_terminal() {
                    return false;
                }
            }
        }
    }

    true
}

// 对对胡
fn is_dui_dui_hu(ctx: &FanContext) -> bool {
    ctx.counts.kezi_total == 4
}

// 平胡 (保底)
fn is_ping_hu(_ctx: &FanContext) -> bool {
    true
}

// 主番名对应的基础倍数
pub fn base_fan(name: &str) -> Option<u64> {
    FAN_PATTERNS.iter().find(|p| p.name == name).map(|p| p.fan)
}

#[test]
fn test_fan_patterns_order() {
    // 表按基础倍数降序, 最后一项为恒真的保底番
    for w in FAN_PATTERNS.windows(2) {
        assert!(w[0].fan >= w[1].fan, "{:?} -> {:?}", w[0], w[1]);
    }
    let last = &FAN_PATTERNS[FAN_PATTERNS.len() - 1];
    assert_eq!(last.name, "平胡");
    assert_eq!(last.fan, 1);
    assert_eq!(base_fan("清七对"), Some(16));

    // 状态标志不是主番
    assert_eq!(base_fan("自摸"), None);
}
