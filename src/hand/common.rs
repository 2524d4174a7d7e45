use crate::errors::{SichuanError, SichuanResult};
use crate::model::*;

// 解析连写表示 ("123m456p" 形式): 数字连写, 花色字母收尾
pub fn tiles_from_string(exp: &str) -> SichuanResult<Vec<Tile>> {
    let mut tiles = vec![];
    let mut nis = vec![];
    for c in exp.chars() {
        match c {
            '1'..='9' => nis.push(c as usize - '0' as usize),
            _ => {
                let ti = match tile_type_from_char(c) {
                    Some(ti) if !nis.is_empty() => ti,
                    _ => {
                        return Err(SichuanError::InvalidTileNotation {
                            input: exp.to_string(),
                        })
                    }
                };
                for &ni in &nis {
                    tiles.push(Tile(ti, ni));
                }
                nis.clear();
            }
        }
    }
    if !nis.is_empty() {
        // 末尾数字缺少花色字母
        return Err(SichuanError::InvalidTileNotation {
            input: exp.to_string(),
        });
    }
    tiles.sort();
    Ok(tiles)
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        tt[t.0][t.1] += 1;
    }
    tt
}

// 连写表示直接转计数表
pub fn tile_table_from_string(exp: &str) -> SichuanResult<TileTable> {
    Ok(tiles_to_tile_table(&tiles_from_string(exp)?))
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut tiles = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            for _ in 0..tt[ti][ni] {
                tiles.push(Tile(ti, ni));
            }
        }
    }
    tiles
}

// 从字符串构造副露 ("777s" 或 "5555m+2" 形式, +n 为出牌方座位)
// 字符串无法区分明杠和补杠, 四张一律按明杠处理 (算番相同)
pub fn meld_from_string(exp: &str) -> SichuanResult<Meld> {
    let (tile_part, from) = match exp.split_once('+') {
        Some((head, tail)) => {
            let from: Seat = tail.parse().map_err(|_| SichuanError::InvalidMeld {
                message: format!("invalid seat: '{}'", tail),
            })?;
            if from >= SEAT {
                return Err(SichuanError::InvalidMeld {
                    message: format!("invalid seat: '{}'", tail),
                });
            }
            (head, from)
        }
        None => (exp, 0),
    };

    let tiles = tiles_from_string(tile_part)?;
    let meld_type = match tiles.len() {
        3 => MeldType::Peng,
        4 => MeldType::Minggang,
        n => {
            return Err(SichuanError::InvalidMeld {
                message: format!("expects 3 or 4 tiles, got {}", n),
            })
        }
    };
    Meld::from_tiles(meld_type, &tiles, from)
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("123m55p9s").unwrap();
    assert_eq!(
        tiles,
        vec![
            Tile(TM, 1),
            Tile(TM, 2),
            Tile(TM, 3),
            Tile(TP, 5),
            Tile(TP, 5),
            Tile(TS, 9)
        ]
    );
    assert_eq!(tiles_from_string("9s1m").unwrap(), vec![Tile(TM, 1), Tile(TS, 9)]);
    assert_eq!(tiles_from_string("").unwrap(), vec![]);
    assert!(matches!(
        tiles_from_string("120m"),
        Err(SichuanError::InvalidTileNotation { .. })
    ));
    assert!(tiles_from_string("123").is_err());
    assert!(tiles_from_string("m123").is_err());
    assert!(tiles_from_string("123m45").is_err());
}

#[test]
fn test_tile_table_roundtrip() {
    let hand = tiles_from_string("11m345p67899s").unwrap();
    let tt = tiles_to_tile_table(&hand);
    assert_eq!(count_tiles(&tt), hand.len());
    assert_eq!(tiles_from_tile_table(&tt), hand);
}

#[test]
fn test_meld_from_string() {
    let m = meld_from_string("777s+3").unwrap();
    assert_eq!(m.meld_type, MeldType::Peng);
    assert_eq!(m.tile, Tile(TS, 7));
    assert_eq!(m.from, 3);
    let g = meld_from_string("1111m").unwrap();
    assert!(g.is_gang());
    assert_eq!(g.from, 0);
    assert!(matches!(
        meld_from_string("77s"),
        Err(SichuanError::InvalidMeld { .. })
    ));
    assert!(meld_from_string("123m").is_err());
    assert!(meld_from_string("777s+9").is_err());
    assert!(meld_from_string("777s+x").is_err());
}
