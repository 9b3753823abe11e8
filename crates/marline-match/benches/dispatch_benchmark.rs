// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, Criterion};
use marline_core::maybe::Maybe;
use marline_match::chain::{match_maybe, Case, CaseList};
use marline_match::dispatch::{KeyDispatcher, Keyed, TagDispatcher, Tagged};
use std::cell::Cell;
use std::hint::black_box;

enum Sample {
    Small(i64),
    Medium(i64),
    Large(i64),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum SampleTag {
    Small,
    Medium,
    Large,
}

impl Tagged for Sample {
    type Tag = SampleTag;

    fn tag(&self) -> SampleTag {
        match self {
            Sample::Small(_) => SampleTag::Small,
            Sample::Medium(_) => SampleTag::Medium,
            Sample::Large(_) => SampleTag::Large,
        }
    }
}

impl Keyed for Sample {
    fn type_key(&self) -> &'static str {
        match self {
            Sample::Small(_) => "small",
            Sample::Medium(_) => "medium",
            Sample::Large(_) => "large",
        }
    }
}

fn bench_tag_dispatch(c: &mut Criterion) {
    let sink = Cell::new(0i64);
    let mut dispatcher = TagDispatcher::new();
    dispatcher.on(SampleTag::Small, |s: &Sample| {
        if let Sample::Small(v) = s {
            sink.set(sink.get() + v);
        }
    });
    dispatcher.on(SampleTag::Medium, |s: &Sample| {
        if let Sample::Medium(v) = s {
            sink.set(sink.get() + v);
        }
    });
    dispatcher.on(SampleTag::Large, |s: &Sample| {
        if let Sample::Large(v) = s {
            sink.set(sink.get() + v);
        }
    });

    let subject = Maybe::present(Sample::Large(7));
    c.bench_function("tag_dispatch_hit", |b| {
        b.iter(|| dispatcher.dispatch(black_box(&subject), || ()))
    });
}

fn bench_key_dispatch(c: &mut Criterion) {
    let sink = Cell::new(0i64);
    let mut dispatcher = KeyDispatcher::new();
    dispatcher.on("small", |s: &Sample| {
        if let Sample::Small(v) = s {
            sink.set(sink.get() + v);
        }
    });
    dispatcher.on("medium", |s: &Sample| {
        if let Sample::Medium(v) = s {
            sink.set(sink.get() + v);
        }
    });
    dispatcher.on("large", |s: &Sample| {
        if let Sample::Large(v) = s {
            sink.set(sink.get() + v);
        }
    });

    let subject = Maybe::present(Sample::Medium(7));
    c.bench_function("key_dispatch_hit", |b| {
        b.iter(|| dispatcher.dispatch(black_box(&subject), || ()))
    });
}

fn bench_predicate_chain(c: &mut Criterion) {
    let sink = Cell::new(0i64);
    let mut cases: CaseList<'_, i64> = CaseList::new();
    cases.push(Case::new(|x: &i64| *x < 0, |_: &i64| ()));
    cases.push(Case::new(|x: &i64| *x == 0, |_: &i64| ()));
    cases.push(Case::new(|x: &i64| *x % 2 == 1, |_: &i64| ()));
    cases.push(Case::new(
        |x: &i64| *x % 2 == 0,
        |x: &i64| sink.set(sink.get() + x),
    ));

    // The subject only satisfies the last case, so the whole chain is
    // scanned on every iteration.
    let subject = Maybe::present(42i64);
    c.bench_function("predicate_chain_last_case", |b| {
        b.iter(|| match_maybe(black_box(&subject), &mut cases, || ()))
    });
}

criterion_group!(
    benches,
    bench_tag_dispatch,
    bench_key_dispatch,
    bench_predicate_chain
);
criterion_main!(benches);
