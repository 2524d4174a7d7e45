use super::*;
use crate::errors::{SichuanError, SichuanResult};
use crate::util::misc::vec_to_string;

// 副露类型 (血战到底没有吃)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Peng,     // 碰
    Minggang, // 明杠
    Bugang,   // 补杠 (碰后摸到第四张)
}

// 副露: 同一张牌的刻子或杠子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tile: Tile,
    pub from: Seat, // 出牌方 (仅记录用, 不参与算番)
}

impl Meld {
    pub fn new(meld_type: MeldType, tile: Tile, from: Seat) -> Self {
        Self { meld_type, tile, from }
    }

    // 由牌列表构造, 校验张数与牌面
    pub fn from_tiles(meld_type: MeldType, tiles: &[Tile], from: Seat) -> SichuanResult<Self> {
        let expected = match meld_type {
            MeldType::Peng => 3,
            MeldType::Minggang | MeldType::Bugang => 4,
        };
        if tiles.len() != expected {
            return Err(SichuanError::InvalidMeld {
                message: format!(
                    "{:?} expects {} tiles, got {}",
                    meld_type,
                    expected,
                    tiles.len()
                ),
            });
        }
        let tile = tiles[0];
        if tiles.iter().any(|&t| t != tile) {
            return Err(SichuanError::InvalidMeld {
                message: format!("tiles not identical: {}", vec_to_string(tiles)),
            });
        }
        Ok(Self { meld_type, tile, from })
    }

    // 杠子
    #[inline]
    pub fn is_gang(&self) -> bool {
        self.meld_type != MeldType::Peng
    }

    // 占用的同面张数
    #[inline]
    pub fn count(&self) -> usize {
        if self.is_gang() {
            4
        } else {
            3
        }
    }

    // 展开成牌列表
    pub fn tiles(&self) -> Vec<Tile> {
        vec![self.tile; self.count()]
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.count() {
            write!(f, "{}", self.tile.1)?;
        }
        write!(f, "{}+{}", ['m', 'p', 's'][self.tile.0], self.from)
    }
}

#[test]
fn test_meld_from_tiles() {
    let t = Tile(TP, 5);
    let m = Meld::from_tiles(MeldType::Peng, &[t, t, t], 2).unwrap();
    assert_eq!(m.tile, t);
    assert!(!m.is_gang());
    assert_eq!(m.count(), 3);
    let g = Meld::from_tiles(MeldType::Minggang, &[t, t, t, t], 1).unwrap();
    assert!(g.is_gang());
    assert_eq!(g.tiles(), vec![t; 4]);
    assert!(matches!(
        Meld::from_tiles(MeldType::Peng, &[t, t, t, t], 0),
        Err(SichuanError::InvalidMeld { .. })
    ));
    assert!(Meld::from_tiles(MeldType::Minggang, &[t, t, t, Tile(TP, 6)], 0).is_err());
}

#[test]
fn test_meld_display() {
    let m = Meld::new(MeldType::Peng, Tile(TS, 7), 3);
    assert_eq!(m.to_string(), "777s+3");
    let g = Meld::new(MeldType::Bugang, Tile(TM, 1), 0);
    assert_eq!(g.to_string(), "1111m+0");
}
