use interval_map::IntervalMap;

#[test]
fn assign_scenario() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');

	map.assign(1, 3, 'B');
	assert_eq!(map.get(&0), &'A');
	assert_eq!(map.get(&1), &'B');
	assert_eq!(map.get(&2), &'B');
	assert_eq!(map.get(&3), &'A');
	assert_eq!(map.breakpoint_count(), 2);

	map.assign(2, 5, 'B');
	for key in 1..5 {
		assert_eq!(map.get(&key), &'B');
	}
	assert_eq!(map.get(&5), &'A');
	assert_eq!(map.breakpoint_count(), 2);

	map.assign(1, 5, 'A');
	assert!(map.is_uniform());
	for key in -10..10 {
		assert_eq!(map.get(&key), &'A');
	}

	let before = map.clone();
	map.assign(5, 5, 'C');
	assert_eq!(map, before);
}

#[test]
fn assign_overwrites_overlap() {
	let mut map: IntervalMap<i32, u32> = IntervalMap::new(0);

	map.assign(0, 20, 1);
	map.assign(10, 30, 2);

	assert_eq!(map.get(&-1), &0);
	assert_eq!(map.get(&0), &1);
	assert_eq!(map.get(&9), &1);
	assert_eq!(map.get(&10), &2);
	assert_eq!(map.get(&29), &2);
	assert_eq!(map.get(&30), &0);
	assert_eq!(map.breakpoint_count(), 3);
}

#[test]
fn assign_at_key_extremes() {
	let mut map: IntervalMap<u8, bool> = IntervalMap::new(false);

	map.assign(u8::MIN, 10, true);
	map.assign(200, u8::MAX, true);

	assert_eq!(map.get(&0), &true);
	assert_eq!(map.get(&10), &false);
	assert_eq!(map.get(&254), &true);
	// the end bound is excluded, so `u8::MAX` itself is never reached.
	assert_eq!(map.get(&u8::MAX), &false);

	map.assign_from(200, true);
	assert_eq!(map.get(&u8::MAX), &true);
	assert_eq!(map.breakpoint_count(), 3);
}

#[test]
fn assign_with_string_values() {
	let mut map: IntervalMap<u64, String> = IntervalMap::new(String::new());

	map.assign(10, 20, "a".to_string());
	map.assign(15, 25, "b".to_string());
	map.assign(20, 25, "a".to_string());

	assert_eq!(map.get(&12), "a");
	assert_eq!(map.get(&17), "b");
	assert_eq!(map.get(&22), "a");
	assert_eq!(map.get(&25), "");
	assert_eq!(map.breakpoint_count(), 4);
}

#[test]
fn extend() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
	map.extend([(1..3, 'B'), (2..5, 'B'), (4..4, 'C'), (3..4, 'D')]);

	assert_eq!(map.get(&2), &'B');
	assert_eq!(map.get(&3), &'D');
	assert_eq!(map.get(&4), &'B');
	assert_eq!(map.get(&5), &'A');

	let other = IntervalMap::from_iter_with_default([(1..3, 'B'), (2..5, 'B'), (3..4, 'D')], 'A');
	assert_eq!(map, other);
}

#[test]
fn clear() {
	let mut map: IntervalMap<i32, char> = IntervalMap::new('A');
	map.assign(1, 3, 'B');
	map.clear();

	assert!(map.is_uniform());
	assert_eq!(map, IntervalMap::new('A'));
}
