use log::debug;

/// A finite, duplicate-free collection of symbols with a fixed canonical
/// order: the order symbols were first inserted in.
///
/// The canonical order is load-bearing for tuple enumeration, since it
/// defines which symbol is "first" (digit 0) and which is "last" (digit
/// `len - 1`). Duplicate symbols in the input are dropped; the first
/// occurrence keeps its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<T> {
    symbols: Vec<T>,
}

impl<T: PartialEq> Alphabet<T> {
    pub fn new(symbols: impl IntoIterator<Item = T>) -> Self {
        let mut distinct: Vec<T> = Vec::new();
        for symbol in symbols {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }
        debug!("Built alphabet with {} distinct symbols", distinct.len());
        Self { symbols: distinct }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at the given canonical index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.symbols.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.symbols.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.symbols.last()
    }

    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }
}

impl<T: PartialEq> FromIterator<T> for Alphabet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
