//! Identifiers for everything a UI can select, with display names and explanations.
//!
//! Each identifier parses from its display name case-insensitively, ignoring spaces, hyphens and
//! underscores, so `"Level Order"`, `"level_order"` and `"LEVELORDER"` all select
//! [`Traversal::LevelOrder`].

use alloc::string::ToString;

use crate::Error;

macro_rules! identifier {
    (
        $(#[$meta:meta])*
        $kind:literal, $name:ident {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every variant, in menu order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The menu label.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl core::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| same_name(v.name(), s))
                    .ok_or_else(|| Error::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

fn same_name(label: &str, input: &str) -> bool {
    fn key(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
    }
    key(label).eq(key(input))
}

identifier! {
    /// The top-level menu.
    "category", Category {
        Searching => "Searching",
        Sorting => "Sorting",
        TreeTraversal => "Tree Traversal",
        ListOperations => "List Operations",
        StackOperations => "Stack Operations",
        QueueOperations => "Queue Operations",
    }
}

identifier! {
    "search algorithm", SearchAlgorithm {
        Linear => "Linear Search",
        Binary => "Binary Search",
        Jump => "Jump Search",
    }
}

identifier! {
    "sort algorithm", SortAlgorithm {
        Bubble => "Bubble Sort",
        Insertion => "Insertion Sort",
        Selection => "Selection Sort",
        Merge => "Merge Sort",
        Quick => "Quick Sort",
    }
}

identifier! {
    "traversal", Traversal {
        Inorder => "Inorder",
        Preorder => "Preorder",
        Postorder => "Postorder",
        LevelOrder => "Level Order",
    }
}

identifier! {
    /// Singly linked list operations.
    "list operation", ListOperation {
        InsertAtBeginning => "Insert at Beginning",
        InsertAtEnd => "Insert at End",
        InsertAtPosition => "Insert at Position",
        DeleteAtBeginning => "Delete at Beginning",
        DeleteAtEnd => "Delete at End",
        DeleteAtPosition => "Delete at Position",
    }
}

identifier! {
    "stack operation", StackOperation {
        Push => "Push",
        Pop => "Pop",
        Peek => "Peek",
        IsEmpty => "Is Empty",
        Size => "Size",
    }
}

identifier! {
    "queue operation", QueueOperation {
        Enqueue => "Enqueue",
        Dequeue => "Dequeue",
        Peek => "Peek",
        IsEmpty => "Is Empty",
        Size => "Size",
    }
}

impl SearchAlgorithm {
    /// Binary and jump search only work on sorted input.
    pub fn needs_sorted_input(self) -> bool {
        !matches!(self, Self::Linear)
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::Linear => {
                "Linear search iterates through each element of the array until the target is \
                 found or the end is reached."
            }
            Self::Binary => {
                "Binary search works on sorted arrays. It repeatedly divides the search interval \
                 in half."
            }
            Self::Jump => {
                "Jump search works on sorted arrays by jumping ahead by a fixed step and then \
                 performing a linear search."
            }
        }
    }
}

impl SortAlgorithm {
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble sort repeatedly steps through the list, compares adjacent elements and \
                 swaps them if they are in the wrong order."
            }
            Self::Insertion => "Insertion sort builds the final sorted array one item at a time.",
            Self::Selection => {
                "Selection sort repeatedly finds the minimum element from the unsorted part and \
                 puts it at the beginning."
            }
            Self::Merge => {
                "Merge sort is a divide-and-conquer algorithm that divides the array into halves, \
                 recursively sorts them, and then merges the sorted halves."
            }
            Self::Quick => {
                "Quick sort is also a divide-and-conquer algorithm that picks an element as pivot \
                 and partitions the array around the pivot."
            }
        }
    }
}

impl Traversal {
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Inorder => {
                "Inorder traversal visits the left subtree, then the root, then the right subtree."
            }
            Self::Preorder => {
                "Preorder traversal visits the root, then the left subtree, then the right subtree."
            }
            Self::Postorder => {
                "Postorder traversal visits the left subtree, then the right subtree, then the root."
            }
            Self::LevelOrder => {
                "Level order traversal visits nodes level by level, from left to right."
            }
        }
    }
}

impl ListOperation {
    /// Whether the operation takes a value to insert.
    pub fn takes_value(self) -> bool {
        matches!(
            self,
            Self::InsertAtBeginning | Self::InsertAtEnd | Self::InsertAtPosition
        )
    }

    /// Whether the operation takes a 0-based position and reports walk frames.
    pub fn takes_position(self) -> bool {
        matches!(self, Self::InsertAtPosition | Self::DeleteAtPosition)
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::InsertAtBeginning => {
                "Inserting at the beginning of a linked list involves creating a new node and \
                 making it the new head."
            }
            Self::InsertAtEnd => {
                "Inserting at the end requires traversing to the last node and appending the new \
                 node."
            }
            Self::InsertAtPosition => {
                "Inserting at a specific position involves traversing to that position and \
                 linking the new node."
            }
            Self::DeleteAtBeginning => {
                "Deleting at the beginning involves updating the head to the next node."
            }
            Self::DeleteAtEnd => {
                "Deleting at the end requires traversing to the second-to-last node and removing \
                 the last node."
            }
            Self::DeleteAtPosition => {
                "Deleting at a specific position involves traversing to that position and \
                 updating the links to bypass the node to be deleted."
            }
        }
    }
}

impl StackOperation {
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Push => "Push adds an element to the top of the stack.",
            Self::Pop => "Pop removes and returns the element at the top of the stack.",
            Self::Peek => "Peek returns the element at the top of the stack without removing it.",
            Self::IsEmpty => "Is Empty checks if the stack contains any elements.",
            Self::Size => "Size returns the number of elements in the stack.",
        }
    }
}

impl QueueOperation {
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Enqueue => "Enqueue adds an element to the rear of the queue.",
            Self::Dequeue => "Dequeue removes and returns the element at the front of the queue.",
            Self::Peek => {
                "Peek returns the element at the front of the queue without removing it."
            }
            Self::IsEmpty => "Is Empty checks if the queue contains any elements.",
            Self::Size => "Size returns the number of elements in the queue.",
        }
    }
}
