//! An *interval map* binds every key of an ordered key space to a value.
//! It starts out mapping the whole space to a single default value, and
//! contiguous ranges of keys are then overwritten with new values.
//!
//! Only the points where the value changes (*breakpoints*) are stored, in a
//! [`btree-slab`](https://crates.io/crates/btree-slab) B-tree. The
//! representation is canonical: two adjacent runs of keys never hold the same
//! value, so the number of stored breakpoints is exactly the number of value
//! transitions.
//!
//! ## Usage
//!
//! ```
//! use interval_map::IntervalMap;
//!
//! let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
//! map.assign(1, 3, 'B');
//! assert_eq!(map.get(&0), &'A');
//! assert_eq!(map.get(&1), &'B');
//! assert_eq!(map[&2], 'B');
//! assert_eq!(map.get(&3), &'A');
//!
//! // Extending the run does not add a breakpoint at `3`.
//! map.assign(2, 5, 'B');
//! assert_eq!(map.breakpoint_count(), 2);
//!
//! // Assigning the default value back removes every breakpoint.
//! map.assign(1, 5, 'A');
//! assert!(map.is_uniform());
//! ```
//!
//! Ranges are half-open: `assign(begin, end, value)` covers `begin` but not
//! `end`. If `!(begin < end)` the range is empty and the map is left untouched.
//!
//! ```
//! # use interval_map::IntervalMap;
//! let mut map: IntervalMap<u8, bool> = IntervalMap::new(false);
//! map.assign(5, 5, true);
//! map.assign(9, 2, true);
//! assert!(map.is_uniform());
//! ```
//!
//! The upper part of the key space can be assigned at once:
//!
//! ```
//! # use interval_map::IntervalMap;
//! let mut map: IntervalMap<u64, &str> = IntervalMap::new("low");
//! map.assign_from(1000, "high");
//! assert_eq!(map.get(&999), &"low");
//! assert_eq!(map.get(&u64::MAX), &"high");
//! ```
//!
//! ## Concurrency
//!
//! The map has no internal synchronization. Share it between threads behind a
//! lock, such as a `RwLock` allowing concurrent lookups.
use btree_slab::generic::Node;

pub mod generic;

pub type DefaultContainer<K, V> = slab::Slab<Node<K, V>>;

pub type IntervalMap<K, V> = generic::IntervalMap<K, V, DefaultContainer<K, V>>;
