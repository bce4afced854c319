use alloc::string::String;
use core::fmt;

/// An asymptotic complexity class, rendered with its conventional big-O label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    Constant,
    Logarithmic,
    SquareRoot,
    Linear,
    Linearithmic,
    Quadratic,
    /// Proportional to the height of a tree.
    Height,
}

impl Order {
    pub fn label(self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::SquareRoot => "O(√n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Height => "O(h)",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time and space complexity labels reported alongside every result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complexity {
    pub time: Order,
    pub space: Order,
}

impl Complexity {
    pub const fn new(time: Order, space: Order) -> Self {
        Self { time, space }
    }

    /// `O(1)` time, `O(1)` space.
    pub const fn constant() -> Self {
        Self::new(Order::Constant, Order::Constant)
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time Complexity: {}, Space Complexity: {}",
            self.time, self.space
        )
    }
}

/// The result of one algorithm or structural operation.
///
/// `message` carries a human-readable explanation when the request could not be applied as
/// asked (out-of-range position, empty container). It is never set on the normal path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome<T> {
    pub value: T,
    pub complexity: Complexity,
    pub message: Option<String>,
}

impl<T> Outcome<T> {
    pub fn new(value: T, complexity: Complexity) -> Self {
        Self {
            value,
            complexity,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            complexity: self.complexity,
            message: self.message,
        }
    }
}

impl Outcome<Option<usize>> {
    /// The found index, or `-1` when the target is absent.
    pub fn index_or_sentinel(&self) -> isize {
        self.value
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }
}
