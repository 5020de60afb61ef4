#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use sparsevec::SparseVector;

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Set(u8, i32),
    Unset(u8),
    AddRange(u8, Vec<i32>),
    Combine(u8, Vec<i32>, i32),
    Resize(u8),
    ResizeWith(u8, i32),
    Push(i32),
    MakeVoid(u8, u8),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut sv: SparseVector<i32> = SparseVector::new();
    let mut model: Vec<Option<i32>> = Vec::new();

    for op in ops {
        match op {
            Op::Set(i, v) => {
                let i = i as usize;
                sv.set(i, v);
                if i >= model.len() {
                    model.resize(i + 1, None);
                }
                model[i] = Some(v);
            }
            Op::Unset(i) => {
                let i = i as usize;
                sv.unset(i);
                if i < model.len() {
                    model[i] = None;
                }
            }
            Op::AddRange(o, data) => {
                let o = o as usize;
                sv.add_range(o, &data);
                if !data.is_empty() {
                    if o + data.len() > model.len() {
                        model.resize(o + data.len(), None);
                    }
                    for (k, v) in data.iter().enumerate() {
                        model[o + k] = Some(*v);
                    }
                }
            }
            Op::Combine(o, data, void) => {
                let o = o as usize;
                sv.combine_range(o, &data, |a, b| a.wrapping_add(b), void);
                if !data.is_empty() {
                    if o + data.len() > model.len() {
                        model.resize(o + data.len(), None);
                    }
                    for (k, x) in data.iter().enumerate() {
                        let stored = model[o + k].unwrap_or(void);
                        model[o + k] = Some(stored.wrapping_add(*x));
                    }
                }
            }
            Op::Resize(n) => {
                sv.resize(n as usize);
                model.resize(n as usize, None);
            }
            Op::ResizeWith(n, v) => {
                let n = n as usize;
                sv.resize_with(n, v);
                if n >= model.len() {
                    model.resize(n, Some(v));
                } else {
                    model.truncate(n);
                }
            }
            Op::Push(v) => {
                sv.push(v);
                model.push(Some(v));
            }
            Op::MakeVoid(a, b) => {
                let (a, b) = (a as usize, b as usize);
                sv.make_void(a..b);
                let lo = a.min(model.len());
                let hi = b.min(model.len());
                for cell in &mut model[lo..hi] {
                    *cell = None;
                }
            }
        }

        assert!(sv.is_valid());
        assert_eq!(sv.len(), model.len());
        assert_eq!(sv.count(), model.iter().filter(|c| c.is_some()).count());
        for (i, cell) in model.iter().enumerate() {
            assert_eq!(sv.get(i), cell.unwrap_or(0));
        }
    }
});
