// 基本类型与常量定义
pub type Seat = usize; // 座位索引 (0~3)
pub type Type = usize; // 牌的花色索引 (0~2)
pub type Tnum = usize; // 牌的数字 (1~9)
pub type Index = usize; // 其他索引

pub const SEAT: usize = 4; // 座位数
pub const TYPE: usize = 3; // 花色数
pub const TNUM: usize = 10; // 数字的个数 (0不使用, 1~9)
pub const TILE: usize = 4; // 同种牌的张数

pub const TM: Type = 0; // Type: 万子
pub const TP: Type = 1; // Type: 筒子
pub const TS: Type = 2; // Type: 条子

pub const TILE_KIND: usize = 27; // 牌种总数 (3花色 × 9数字)
