use std::fmt;

// 所有构造期错误; 算法本身不产生错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SichuanError {
    // 花色或数字超出定义域
    InvalidTile { ti: usize, ni: usize },
    // 无法解析的牌表示
    InvalidTileNotation { input: String },
    // 张数或牌面与声明的副露类型不符
    InvalidMeld { message: String },
}

impl fmt::Display for SichuanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SichuanError::InvalidTile { ti, ni } => {
                write!(f, "invalid tile: type={}, num={}", ti, ni)
            }
            SichuanError::InvalidTileNotation { input } => {
                write!(f, "invalid tile notation: '{}'", input)
            }
            SichuanError::InvalidMeld { message } => {
                write!(f, "invalid meld: {}", message)
            }
        }
    }
}

impl std::error::Error for SichuanError {}

pub type SichuanResult<T> = Result<T, SichuanError>;

#[test]
fn test_error_display() {
    let e = SichuanError::InvalidTileNotation {
        input: "1x".to_string(),
    };
    assert_eq!(e.to_string(), "invalid tile notation: '1x'");
}
