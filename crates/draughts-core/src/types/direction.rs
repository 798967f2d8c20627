//! 対角方向（Direction）

use super::Color;

/// 対角4方向
///
/// `ALL` の並び（左上・右上・左下・右下）は探索の同点打ち切り
/// （先に見つかった手を保持する）に影響するため変更しないこと。
/// 「上」は行0側を指す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    UpLeft = 0,
    UpRight = 1,
    DownLeft = 2,
    DownRight = 3,
}

impl Direction {
    /// 方向の数
    pub const NUM: usize = 4;

    /// 全ての方向（同点打ち切りの基準となる走査順）
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// 列の増分
    #[inline]
    pub const fn dc(self) -> i8 {
        match self {
            Direction::UpLeft | Direction::DownLeft => -1,
            Direction::UpRight | Direction::DownRight => 1,
        }
    }

    /// 行の増分（Up系は行0側へ）
    #[inline]
    pub const fn dr(self) -> i8 {
        match self {
            Direction::UpLeft | Direction::UpRight => -1,
            Direction::DownLeft | Direction::DownRight => 1,
        }
    }

    /// color の通常駒にとって前進方向かどうか
    #[inline]
    pub const fn is_forward(self, color: Color) -> bool {
        self.dr() == color.forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas() {
        assert_eq!((Direction::UpLeft.dc(), Direction::UpLeft.dr()), (-1, -1));
        assert_eq!((Direction::UpRight.dc(), Direction::UpRight.dr()), (1, -1));
        assert_eq!((Direction::DownLeft.dc(), Direction::DownLeft.dr()), (-1, 1));
        assert_eq!((Direction::DownRight.dc(), Direction::DownRight.dr()), (1, 1));
    }

    #[test]
    fn test_direction_forward() {
        // 白はUp系、黒はDown系が前進
        assert!(Direction::UpLeft.is_forward(Color::White));
        assert!(Direction::UpRight.is_forward(Color::White));
        assert!(!Direction::DownLeft.is_forward(Color::White));
        assert!(Direction::DownRight.is_forward(Color::Black));
        assert!(!Direction::UpRight.is_forward(Color::Black));
    }

    #[test]
    fn test_direction_order() {
        // 走査順は 左上→右上→左下→右下 で固定
        assert_eq!(
            Direction::ALL,
            [
                Direction::UpLeft,
                Direction::UpRight,
                Direction::DownLeft,
                Direction::DownRight
            ]
        );
    }
}
