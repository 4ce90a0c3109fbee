//! This crate provides classic data structures and algorithms: a doubly-linked
//! list whose nodes live in an arena, a queue, a stack, a growable ring buffer,
//! five comparison sorts and a handful of searches over sorted slices.
//!
//! The [`List`] allows inserting and removing elements at either end in
//! constant time. In compromise, accessing or mutating elements at any position
//! take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use classic_dsa::List;
//!
//! let mut list = List::new();
//! list.append(10);
//! list.append(20);
//! list.append(30);
//! list.prepend(5);
//! list.insert_at(2, 15);
//!
//! assert_eq!(list.to_string(), "HEAD <-> 5 <-> 10 <-> 15 <-> 20 <-> 30 <-> NULL");
//! assert_eq!(list.get_value_at(3), Ok(&20));
//!
//! assert_eq!(list.remove_value(&15), Ok(15));
//! assert_eq!(list.remove_at(0), Some(5));
//! assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!                 arena slots (Vec)
//!    ┌───────────┬───────────┬───────────┬───────────┐
//!    │  Node 1   │  vacant   │  Node 0   │  Node 2   │
//!    │ prev: #2  │ next_free │ prev: -   │ prev: #0  │
//!    │ next: #3  │   ─ ─ ─   │ next: #0  │ next: -   │
//!    │ payload T │           │ payload T │ payload T │
//!    └───────────┴───────────┴───────────┴───────────┘
//!                      ↑           ↑           ↑
//! ╔═══════════╗        │           │           │
//! ║   free    ║ ───────┘           │           │
//! ╟───────────╢                    │           │
//! ║   head    ║ ───────────────────┘           │
//! ╟───────────╢                                │
//! ║   tail    ║ ───────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - an arena of slots, each either holding a node or chained into a free list
//!   of vacant slots that later insertions reuse;
//! - the handles `head` and `tail` of the first and last nodes, both absent in
//!   an empty list;
//! - a length field `len` indicating the length of the list.
//!
//! Each node holds the handles of its previous and next nodes (absent at the
//! boundaries of the list) and the actual payload `T`.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the end position right after the last node is indexed by *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators. These are
//! double-ended, exact-size and fused.
//!
//! ## Examples
//!
//! ```
//! use classic_dsa::List;
//!
//! let list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! let reversed: Vec<_> = list.iter().rev().copied().collect();
//! assert_eq!(reversed, vec![3, 2, 1]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] move forward or backward over a list.
//! In a list with length *n*, there are *n* + 1 valid locations for the cursor,
//! indexed by 0, 1, ..., *n*. [`CursorMut`] can also edit the list in place:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`backspace`]: remove the item before the cursor.
//!
//! ## Examples
//!
//! ```
//! use classic_dsa::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! # Other Structures
//!
//! - [`Queue`]: first-in, first-out over a singly linked chain;
//! - [`Stack`]: last-in, first-out over a singly linked chain;
//! - [`RingBuffer`]: double-ended and index addressable, doubling its storage
//!   when full.
//!
//! # Algorithms
//!
//! The [`algorithms`] module sorts slices in place ([`bubble_sort`],
//! [`insertion_sort`], [`selection_sort`], [`merge_sort`], [`quick_sort`] and
//! [`exchange_sort`]) and searches sorted slices ([`binary_search`],
//! [`binary_search_recursive`] and [`jump_search`]).
//!
//! # Logging
//!
//! Structural edits and failed lookups are reported as [`tracing`] events. The
//! library never installs a subscriber.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IntoIter`]: crate::IntoIter
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace

#[doc(inline)]
pub use algorithms::search::{
    binary_search, binary_search_recursive, jump_search, SearchAlgorithm,
};
#[doc(inline)]
pub use algorithms::sort::{
    bubble_sort, bubble_sort_by, exchange_sort, exchange_sort_by, insertion_sort,
    insertion_sort_by, merge_sort, merge_sort_by, quick_sort, quick_sort_by, selection_sort,
    selection_sort_by, SortAlgorithm,
};
pub use error::{Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use ring_buffer::RingBuffer;
#[doc(inline)]
pub use stack::Stack;

pub mod algorithms;
mod error;
pub mod list;
pub mod queue;
pub mod ring_buffer;
pub mod stack;
