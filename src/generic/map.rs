use btree_slab::generic::{
	map::{BTreeExt, BTreeMap},
	node::Item,
	Node,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	fmt,
	ops::{Index, Range},
};

/// Interval map.
///
/// Maps every key of the ordered key space `K` to a value of type `V`.
/// The map starts out sending every key to a default value, and ranges of keys
/// are then overwritten with [`assign`](IntervalMap::assign).
///
/// The function is stored as a B-tree of *breakpoints*: an entry `(k, v)`
/// means that every key from `k` (included) up to the next breakpoint
/// (excluded) maps to `v`. Keys below the first breakpoint map to the default
/// value. The representation is kept canonical: no breakpoint carries the same
/// value as the run preceding it, so there is exactly one breakpoint per value
/// transition.
///
/// The type parameter `C` is the slab storing the B-tree nodes.
#[derive(Clone)]
pub struct IntervalMap<K, V, C> {
	default: V,
	btree: BTreeMap<K, V, C>,
}

impl<K, V, C: Default> IntervalMap<K, V, C> {
	/// Create a new map sending every key to `default`.
	pub fn new(default: V) -> IntervalMap<K, V, C> {
		IntervalMap {
			default,
			btree: BTreeMap::new(),
		}
	}

	/// Send every key back to the default value.
	pub fn clear(&mut self) {
		self.btree = BTreeMap::new()
	}
}

impl<K, V: Default, C: Default> Default for IntervalMap<K, V, C> {
	fn default() -> Self {
		Self::new(V::default())
	}
}

impl<K, V, C> IntervalMap<K, V, C> {
	/// Value bound to every key that was never assigned.
	pub fn default_value(&self) -> &V {
		&self.default
	}
}

impl<K, V, C: SimpleCollectionRef + Slab<Node<K, V>>> IntervalMap<K, V, C> {
	/// Number of stored breakpoints, which is the number of value transitions
	/// of the represented function.
	pub fn breakpoint_count(&self) -> usize {
		self.btree.len()
	}

	/// Checks if every key is bound to the default value.
	pub fn is_uniform(&self) -> bool {
		self.btree.is_empty()
	}

	/// Returns the value bound to the given key.
	///
	/// This is the value of the greatest breakpoint less or equal to `key`,
	/// or the default value if there is none.
	pub fn get<Q: ?Sized + Ord>(&self, key: &Q) -> &V
	where
		K: Borrow<Q>,
	{
		self.predecessor(key, true).map_or(&self.default, Item::value)
	}

	/// Value of the run ending right before `key`.
	fn value_before<Q: ?Sized + Ord>(&self, key: &Q) -> &V
	where
		K: Borrow<Q>,
	{
		self.predecessor(key, false).map_or(&self.default, Item::value)
	}

	/// Breakpoint with the greatest key below `key`, or equal to it if
	/// `inclusive` is set.
	fn predecessor<Q: ?Sized + Ord>(&self, key: &Q, inclusive: bool) -> Option<&Item<K, V>>
	where
		K: Borrow<Q>,
	{
		let addr = match self.btree.address_of(key) {
			Ok(addr) if inclusive => Some(addr),
			Ok(addr) | Err(addr) => self.btree.previous_item_address(addr),
		};

		addr.and_then(|addr| self.btree.item(addr))
	}
}

#[cfg(any(test, feature = "test"))]
impl<K, V: PartialEq, C: SimpleCollectionRef + Slab<Node<K, V>>> IntervalMap<K, V, C> {
	fn assert_canonical(&self) {
		let mut last = &self.default;

		for (_, value) in self.btree.iter() {
			assert!(value != std::mem::replace(&mut last, value));
		}
	}
}

impl<K, V, C> IntervalMap<K, V, C>
where
	K: Clone + Ord,
	V: Clone + PartialEq,
	C: SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, V>>,
{
	/// Create a map from a sequence of assignments, applied in order.
	pub fn from_iter_with_default<I: IntoIterator<Item = (Range<K>, V)>>(
		it: I,
		default: V,
	) -> Self
	where
		C: Default,
	{
		let mut result = Self::new(default);
		result.extend(it);
		result
	}

	/// Removes every breakpoint from `begin` (included) up to `end` (included,
	/// unbounded if `None`), returning the value of the greatest one.
	fn remove_breakpoints(&mut self, begin: &K, end: Option<&K>) -> Option<V> {
		let mut last = None;
		let mut superseded = 0usize;

		loop {
			let key = match end {
				Some(end) => self.predecessor(end, true).map(Item::key),
				None => self.btree.last_key_value().map(|(key, _)| key),
			}
			.filter(|key| *key >= begin)
			.cloned();

			let Some(key) = key else {
				break;
			};

			let value = self.btree.remove(&key);
			debug_assert!(value.is_some());

			if superseded == 0 {
				last = value;
			}
			superseded += 1;
		}

		#[cfg(feature = "tracing")]
		tracing::trace!(superseded, "removed breakpoints");

		last
	}

	/// Assign `value` to every key in `key_begin..key_end`.
	///
	/// Keys outside of the range keep their current value.
	/// If `!(key_begin < key_end)` the range is empty and nothing happens.
	pub fn assign(&mut self, key_begin: K, key_end: K, value: V) {
		if !(key_begin < key_end) {
			return;
		}

		let before = self.value_before(&key_begin).clone();

		// The last breakpoint in `[key_begin, key_end]` defines the value
		// holding at `key_end`. Without one, the run of `key_begin` covers it.
		let after = self
			.remove_breakpoints(&key_begin, Some(&key_end))
			.unwrap_or_else(|| before.clone());

		#[cfg(feature = "tracing")]
		tracing::trace!(
			starts_run = before != value,
			ends_run = after != value,
			"assign"
		);

		if after != value {
			let replaced = self.btree.insert(key_end, after);
			debug_assert!(replaced.is_none());
		}

		if before != value {
			let replaced = self.btree.insert(key_begin, value);
			debug_assert!(replaced.is_none());
		}

		#[cfg(any(test, feature = "test"))]
		self.assert_canonical();
	}

	/// Assign `value` to every key greater or equal to `key_begin`.
	pub fn assign_from(&mut self, key_begin: K, value: V) {
		self.remove_breakpoints(&key_begin, None);

		let starts_run = *self.value_before(&key_begin) != value;

		#[cfg(feature = "tracing")]
		tracing::trace!(starts_run, "assign_from");

		if starts_run {
			self.btree.insert(key_begin, value);
		}

		#[cfg(any(test, feature = "test"))]
		self.assert_canonical();
	}
}

impl<K, V, C> Extend<(Range<K>, V)> for IntervalMap<K, V, C>
where
	K: Clone + Ord,
	V: Clone + PartialEq,
	C: SimpleCollectionRef + SimpleCollectionMut + SlabMut<Node<K, V>>,
{
	fn extend<I: IntoIterator<Item = (Range<K>, V)>>(&mut self, it: I) {
		for (Range { start, end }, value) in it {
			self.assign(start, end, value)
		}
	}
}

impl<K: Ord, V, C: SimpleCollectionRef + Slab<Node<K, V>>> Index<&K> for IntervalMap<K, V, C> {
	type Output = V;

	fn index(&self, key: &K) -> &V {
		self.get(key)
	}
}

impl<K: PartialEq, V: PartialEq, C: SimpleCollectionRef + Slab<Node<K, V>>> PartialEq
	for IntervalMap<K, V, C>
{
	fn eq(&self, other: &Self) -> bool {
		self.default == other.default
			&& self.btree.len() == other.btree.len()
			&& self.btree.iter().eq(other.btree.iter())
	}
}

impl<K: Eq, V: Eq, C: SimpleCollectionRef + Slab<Node<K, V>>> Eq for IntervalMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C: SimpleCollectionRef + Slab<Node<K, V>>> fmt::Debug
	for IntervalMap<K, V, C>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		struct Breakpoints<'a, K, V, C>(&'a BTreeMap<K, V, C>);

		impl<'a, K: fmt::Debug, V: fmt::Debug, C: SimpleCollectionRef + Slab<Node<K, V>>> fmt::Debug
			for Breakpoints<'a, K, V, C>
		{
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.debug_map().entries(self.0.iter()).finish()
			}
		}

		f.debug_struct("IntervalMap")
			.field("default", &self.default)
			.field("breakpoints", &Breakpoints(&self.btree))
			.finish()
	}
}
