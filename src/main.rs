//! Self-test harness: exercises the public `GrowVec` surface and prints a
//! confirmation line per scenario group.

use growvec::{Cursor, GrowVec};

fn assert_contents(actual: &GrowVec<i32>, expected: &[i32]) {
    assert_eq!(actual.len(), expected.len());
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(actual[i], *value);
    }
}

fn check_constructors() -> bool {
    {
        let vec: GrowVec<i32> = GrowVec::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
    }
    {
        let vec = GrowVec::from([1, 2, 3, 4]);
        assert_contents(&vec, &[1, 2, 3, 4]);
    }
    {
        let vec: GrowVec<i32> = GrowVec::with_len(5);
        assert_contents(&vec, &[0; 5]);
    }
    true
}

fn check_basic_methods() -> bool {
    let mut a = GrowVec::from([1, 3, 5]);
    assert_eq!(a.capacity(), 3);
    assert_contents(&a, &[1, 3, 5]);

    a.pop();
    assert_contents(&a, &[1, 3]);
    a.clear();
    assert_eq!(a.capacity(), 3);
    assert_contents(&a, &[]);

    a.push(6);
    assert_contents(&a, &[6]);

    let mut b = GrowVec::from([3, 4]);

    let a_data = a.as_ptr();
    let b_data = b.as_ptr();

    a.swap_with(&mut b);
    assert_contents(&a, &[3, 4]);
    assert_contents(&b, &[6]);

    assert_eq!(a_data, b.as_ptr());
    assert_eq!(b_data, a.as_ptr());
    true
}

fn check_modifications() -> bool {
    let mut a = GrowVec::from([3, 7, 8]);
    a[0] = 1;
    a[1] = 2;
    a[2] = 3;
    assert_contents(&a, &[1, 2, 3]);
    true
}

fn check_comparison() -> bool {
    assert!(GrowVec::from([1, 2, 3]) == GrowVec::from([1, 2, 3]));
    assert!(GrowVec::from([1, 2, 3]) != GrowVec::from([2, 3, 4]));

    assert!(GrowVec::from([1, 2, 3]) < GrowVec::from([2, 3, 4]));
    assert!(GrowVec::from([1, 2, 3]) < GrowVec::from([1, 2, 3, 4]));
    assert!(GrowVec::from([1, 2, 3, 4]) <= GrowVec::from([2]));
    assert!(GrowVec::from([1, 2, 3, 4]) > GrowVec::new());
    assert!(GrowVec::from([1, 2, 3, 4]) >= GrowVec::from([1]));
    true
}

fn check_cursors() -> bool {
    let mut a: GrowVec<i32> = GrowVec::with_len(5);
    for i in 0..a.len() {
        a[i] = i as i32;
    }
    {
        let mut expected = 0;
        for value in &a {
            assert_eq!(*value, expected);
            expected += 1;
        }
    }

    let mut first = a.begin();
    let mut last = a.end();
    assert_eq!(last - first, a.len() as isize);
    assert_eq!(unsafe { *first.as_ref() }, 0);

    assert!(first == a.begin());
    assert!(first != last);
    assert!(first < last);
    assert!(first <= last);
    assert!(last > first);
    assert!(last >= first);

    first += 1;
    assert_eq!(unsafe { *first.as_ref() }, 1);
    let tmp = first;
    first += 1;
    assert_eq!(unsafe { *tmp.as_ref() }, 1);
    assert_eq!(unsafe { *first.as_ref() }, 2);
    let end = last;
    last -= 1;
    assert!(end == a.end());
    assert_eq!(unsafe { *last.as_ref() }, 4);
    last -= 1;
    first += 1;
    assert!(first == last);
    last -= 3;
    assert_eq!(unsafe { *last.as_ref() }, 0);

    {
        let first = a.begin();
        let size = a.len() as isize;
        for i in 0..size {
            for diff in -2..=2 {
                if i + diff >= 0 && i + diff < size {
                    assert_eq!(unsafe { *(first + i + diff).as_ref() }, (i + diff) as i32);
                }
            }
        }
    }

    // Member-style access through the raw element address, and rebinding a
    // singular cursor.
    let mut b = GrowVec::from([1, 3, 5]);
    unsafe { *b.begin().as_ptr() = 2 };
    unsafe { *(b.end() - 1).as_ptr() = 4 };
    assert_contents(&b, &[2, 3, 4]);

    let mut it: Cursor<i32> = Cursor::new();
    assert!(it.is_null());
    it = b.begin() + 1;
    assert_eq!(unsafe { *it.as_ref() }, 3);
    true
}

fn check_reallocation() -> bool {
    let steps = 16;
    let mut data = GrowVec::new();
    for step in 0..=steps {
        let mut expected = Vec::new();
        for i in 0..=(1i64 << step) {
            data.push(i);
            expected.push(i);
        }
        assert_eq!(data.as_slice(), expected.as_slice());
        assert_eq!(data.capacity(), 1usize << (step + 1));
        data.clear();
    }
    true
}

fn check_reserve() -> bool {
    let mut a = GrowVec::new();
    a.reserve(5);
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 5);

    for i in 0..5 {
        a.push(i);
    }

    assert_eq!(a.capacity(), 5);
    a.push(4);
    assert_eq!(a.capacity(), 10);
    a.reserve(3);
    assert_eq!(a.capacity(), 10);
    a.clear();
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 10);
    true
}

fn main() {
    if check_basic_methods() {
        println!("Basic methods are ok");
    }
    if check_comparison() {
        println!("Comparison is ok");
    }
    if check_constructors() {
        println!("Constructors are ok");
    }
    if check_cursors() {
        println!("Cursors are ok");
    }
    if check_modifications() {
        println!("Modifications are ok");
    }
    if check_reallocation() {
        println!("Reallocation is ok");
    }
    if check_reserve() {
        println!("Reserve is ok");
    }
}
