use std::fmt;

/// 座位（东、南、西、北）
///
/// 四个固定位置，按 东→南→西→北 的顺序轮转，东位是第一局的庄家。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Seat {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Seat {
    /// 所有座位，按轮转顺序
    pub const ALL: [Seat; 4] = [Seat::East, Seat::South, Seat::West, Seat::North];

    /// 座位下标（0-3）
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// 从下标创建座位（对 4 取模）
    pub fn from_index(index: usize) -> Seat {
        Seat::ALL[index % 4]
    }

    /// 下一个座位（固定轮转顺序）
    pub fn next(&self) -> Seat {
        Seat::from_index(self.index() + 1)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Seat::East => "东",
            Seat::South => "南",
            Seat::West => "西",
            Seat::North => "北",
        };
        write!(f, "{}", name)
    }
}
