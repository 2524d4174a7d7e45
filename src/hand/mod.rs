// 手牌的和牌判定, 向听数与算番
mod common;
mod evaluate;
mod fan;
mod parse;
mod shanten;
mod win;

pub use self::{
    common::{
        meld_from_string, tile_table_from_string, tiles_from_string, tiles_from_tile_table,
        tiles_to_tile_table,
    },
    evaluate::{score, ScoreResult},
    fan::base_fan,
    shanten::{effective_tiles, shanten, SHANTEN_UNREACHABLE},
    win::{completing_tiles, is_complete},
};
