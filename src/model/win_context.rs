use super::*;

// 手牌+副露触及的花色掩码 (低3位)
pub fn suit_mask(hand: &TileTable, melds: &[Meld]) -> usize {
    let mut mask = 0;
    for (ti, row) in hand.iter().enumerate() {
        if row.iter().any(|&c| c > 0) {
            mask |= 1 << ti;
        }
    }
    for m in melds {
        mask |= 1 << m.tile.0;
    }
    mask
}

// 和牌时由调用方给出的状态标志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinFlags {
    pub zimo: bool,       // 自摸
    pub gang_kai: bool,   // 杠上开花
    pub qiang_gang: bool, // 抢杠胡
    pub hai_di: bool,     // 海底捞月
    pub tian_hu: bool,    // 天胡 (庄家起手和)
    pub di_hu: bool,      // 地胡 (闲家第一巡和)
}

// 算番上下文: 状态标志 + 由手牌/副露导出的计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinContext {
    pub flags: WinFlags,
    pub gang_count: usize, // 杠的个数
    pub gen_count: usize,  // 根的个数 (手牌+副露集齐4张的数字)
    pub single_suit: bool, // 是否只用一种花色
}

impl WinContext {
    pub fn new(hand: &TileTable, melds: &[Meld], flags: WinFlags) -> Self {
        let gang_count = melds.iter().filter(|m| m.is_gang()).count();

        // 根: 手牌与副露合计持满4张的数字
        let mut total = *hand;
        for m in melds {
            total[m.tile.0][m.tile.1] += m.count();
        }
        let mut gen_count = 0;
        for row in &total {
            for &c in &row[1..] {
                if c == TILE {
                    gen_count += 1;
                }
            }
        }

        let single_suit = suit_mask(hand, melds).count_ones() == 1;
        Self {
            flags,
            gang_count,
            gen_count,
            single_suit,
        }
    }
}

#[test]
fn test_win_context_counts() {
    let mut hand: TileTable = [[0; TNUM]; TYPE];
    hand[TM][2] = 4;
    hand[TM][5] = 2;
    hand[TM][9] = 1; // 碰之外手中还有1张 → 合计4张成根
    let melds = [
        Meld::new(MeldType::Minggang, Tile(TM, 7), 1),
        Meld::new(MeldType::Peng, Tile(TM, 9), 2),
    ];
    let ctx = WinContext::new(&hand, &melds, WinFlags::default());
    assert_eq!(ctx.gang_count, 1);
    assert_eq!(ctx.gen_count, 3);
    assert!(ctx.single_suit);

    let mut other = hand;
    other[TP][1] = 2;
    let ctx = WinContext::new(&other, &melds, WinFlags::default());
    assert!(!ctx.single_suit);
}

#[test]
fn test_suit_mask() {
    let mut hand: TileTable = [[0; TNUM]; TYPE];
    hand[TS][3] = 1;
    assert_eq!(suit_mask(&hand, &[]), 0b100);
    let melds = [Meld::new(MeldType::Peng, Tile(TM, 1), 0)];
    assert_eq!(suit_mask(&hand, &melds), 0b101);
}
