use serde::{de, ser};

use super::*;
use crate::errors::{SichuanError, SichuanResult};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(pub Type, pub Tnum); // (花色索引, 数字)

impl Tile {
    pub fn new(ti: Type, ni: Tnum) -> SichuanResult<Self> {
        if ti >= TYPE || ni == 0 || ni >= TNUM {
            return Err(SichuanError::InvalidTile { ti, ni });
        }
        Ok(Self(ti, ni))
    }

    // 解析紧凑表示 ("5p" 形式, 数字在前)
    pub fn from_symbol(s: &str) -> SichuanResult<Self> {
        let mut chars = s.chars();
        let ni = match chars.next() {
            Some(c @ '1'..='9') => c as usize - '0' as usize,
            _ => return Err(SichuanError::InvalidTileNotation { input: s.to_string() }),
        };
        let ti = match chars.next().and_then(tile_type_from_char) {
            Some(ti) => ti,
            None => return Err(SichuanError::InvalidTileNotation { input: s.to_string() }),
        };
        if chars.next().is_some() {
            return Err(SichuanError::InvalidTileNotation { input: s.to_string() });
        }
        Ok(Self(ti, ni))
    }

    // 规范牌号 (0~26)
    #[inline]
    pub fn id(&self) -> Index {
        self.0 * 9 + self.1 - 1
    }

    // 由规范牌号还原
    #[inline]
    pub fn from_id(id: Index) -> Self {
        Self(id / 9, id % 9 + 1)
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.1 == 1 || self.1 == 9
    }

    // 将牌 (2,5,8)
    #[inline]
    pub fn is_jiang(&self) -> bool {
        self.1 % 3 == 2
    }
}

// 花色字母 → 花色索引
pub fn tile_type_from_char(c: char) -> Option<Type> {
    match c {
        'm' => Some(TM),
        'p' => Some(TP),
        's' => Some(TS),
        _ => None,
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.1, ['m', 'p', 's'][self.0])
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

// 总张数
pub fn count_tiles(tt: &TileTable) -> usize {
    tt.iter().map(|row| row.iter().sum::<usize>()).sum()
}

#[test]
fn test_tile_symbol() {
    assert_eq!(Tile::from_symbol("5p").unwrap(), Tile(TP, 5));
    assert_eq!(Tile::from_symbol("1m").unwrap(), Tile(TM, 1));
    assert_eq!(Tile::from_symbol("9s").unwrap(), Tile(TS, 9));
    assert_eq!(Tile(TS, 9).to_string(), "9s");
    assert!(matches!(
        Tile::from_symbol("0m"),
        Err(SichuanError::InvalidTileNotation { .. })
    ));
    assert!(matches!(
        Tile::from_symbol("1x"),
        Err(SichuanError::InvalidTileNotation { .. })
    ));
    assert!(Tile::from_symbol("p5").is_err());
    assert!(Tile::from_symbol("55m").is_err());
    assert!(Tile::from_symbol("").is_err());
}

#[test]
fn test_tile_new() {
    assert_eq!(Tile::new(TM, 5).unwrap(), Tile(TM, 5));
    assert!(matches!(
        Tile::new(TM, 0),
        Err(SichuanError::InvalidTile { .. })
    ));
    assert!(Tile::new(TM, 10).is_err());
    assert!(Tile::new(3, 5).is_err());
}

#[test]
fn test_tile_id() {
    for id in 0..TILE_KIND {
        assert_eq!(Tile::from_id(id).id(), id);
    }
    assert_eq!(Tile(TM, 1).id(), 0);
    assert_eq!(Tile(TP, 1).id(), 9);
    assert_eq!(Tile(TS, 9).id(), 26);
}

#[test]
fn test_tile_serde() {
    let t = Tile(TP, 5);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "\"5p\"");
    assert_eq!(serde_json::from_str::<Tile>(&json).unwrap(), t);
    assert!(serde_json::from_str::<Tile>("\"5z\"").is_err());
}
