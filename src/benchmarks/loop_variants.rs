use std::fmt;
use std::hint::black_box;

use super::dataset::Dataset;

/// The loop constructs being compared.
///
/// Every variant walks the whole dataset once, front to back. They differ only in how
/// the traversal is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopVariant {
    /// `for i in 0..len` with indexed access
    IndexedFor,
    /// `while i < len` with indexed access and a manual increment
    CountedWhile,
    /// Explicit cursor advanced with `next()` until exhausted
    CursorIterator,
    /// `for byte in &dataset`
    ImplicitIterator,
    /// Closure handed to the dataset's own `for_each`
    CallbackForEach,
}

impl LoopVariant {
    /// All variants, in the order they are warmed up, measured and reported.
    pub const ALL: [LoopVariant; 5] = [
        LoopVariant::IndexedFor,
        LoopVariant::CountedWhile,
        LoopVariant::CursorIterator,
        LoopVariant::ImplicitIterator,
        LoopVariant::CallbackForEach,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LoopVariant::IndexedFor => "IndexedFor",
            LoopVariant::CountedWhile => "CountedWhile",
            LoopVariant::CursorIterator => "CursorIterator",
            LoopVariant::ImplicitIterator => "ImplicitIterator",
            LoopVariant::CallbackForEach => "CallbackForEach",
        }
    }

    /// Walks the dataset with an empty loop body.
    ///
    /// Each element is passed through [`black_box`] so the optimizer cannot remove the
    /// loop, which leaves only the cost of the iteration mechanism itself.
    pub fn traverse(&self, dataset: &Dataset) {
        self.traverse_with(dataset, |byte| {
            black_box(byte);
        });
    }

    /// Walks the dataset, handing every element to `visit` exactly once, in index order.
    #[inline]
    #[allow(clippy::needless_range_loop, clippy::while_let_on_iterator)]
    pub fn traverse_with<F>(&self, dataset: &Dataset, mut visit: F)
    where
        F: FnMut(u8),
    {
        match self {
            LoopVariant::IndexedFor => {
                for i in 0..dataset.len() {
                    visit(dataset[i]);
                }
            }
            LoopVariant::CountedWhile => {
                let mut i = 0;
                while i < dataset.len() {
                    visit(dataset[i]);
                    i += 1;
                }
            }
            LoopVariant::CursorIterator => {
                let mut cursor = dataset.iter();
                while let Some(byte) = cursor.next() {
                    visit(*byte);
                }
            }
            LoopVariant::ImplicitIterator => {
                for byte in dataset {
                    visit(*byte);
                }
            }
            LoopVariant::CallbackForEach => {
                dataset.for_each(|byte| visit(*byte));
            }
        }
    }
}

impl fmt::Display for LoopVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(variant: LoopVariant, dataset: &Dataset) -> Vec<u8> {
        let mut seen = Vec::with_capacity(dataset.len());
        variant.traverse_with(dataset, |byte| seen.push(byte));
        seen
    }

    #[test]
    fn test_every_variant_visits_each_element_once_in_order() {
        let dataset = Dataset::generate(1_000).unwrap();
        for variant in LoopVariant::ALL {
            assert_eq!(
                visited(variant, &dataset).as_slice(),
                dataset.as_slice(),
                "{variant} did not visit the dataset in order"
            );
        }
    }

    #[test]
    fn test_every_variant_handles_empty_dataset() {
        let dataset = Dataset::generate(0).unwrap();
        for variant in LoopVariant::ALL {
            let mut count = 0usize;
            variant.traverse_with(&dataset, |_| count += 1);
            assert_eq!(count, 0, "{variant} visited elements of an empty dataset");
            variant.traverse(&dataset);
        }
    }

    #[test]
    fn test_traversal_is_repeatable() {
        let dataset = Dataset::generate(513).unwrap();
        for variant in LoopVariant::ALL {
            let first = visited(variant, &dataset);
            let second = visited(variant, &dataset);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_declaration_order_and_names() {
        let names: Vec<&str> = LoopVariant::ALL.iter().map(LoopVariant::name).collect();
        assert_eq!(
            names,
            vec![
                "IndexedFor",
                "CountedWhile",
                "CursorIterator",
                "ImplicitIterator",
                "CallbackForEach",
            ]
        );
        assert_eq!(LoopVariant::CursorIterator.to_string(), "CursorIterator");
    }
}
