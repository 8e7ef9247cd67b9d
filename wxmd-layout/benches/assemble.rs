use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use wxmd_layout::{LayoutOptions, LayoutProcessor, PrimaryColor, assemble, scan};

const DOC_SMALL: &str = "# Weekly update\n\n:::tip\nShip it.\n:::\n\nDone.\n";

const DOC_LARGE: &str = r#"# Quarterly review

Revenue grew in every region this quarter.

:::card variant="primary" title="Highlights" icon="✨"
- **Revenue** up 18%
- Churn down to 2.1%
:::

---style=dashed text="Roadmap"---

:::timeline
- January: planning
- March: beta
- June: launch
:::

:::comparison
Plan|Price|Seats
Basic|$10|1
Team|$50|10
:::

:::numbered
- Hire two engineers
Context for the hire.
- Migrate billing
- Retire the old dashboard
:::

:::progress percent="72" label="Migration"
:::

:::button url="https://example.com/report" variant="outline"
Read the full report
:::

---style=gradient---

Thanks for reading.
"#;

fn bench_scan(c: &mut Criterion) {
  let mut group = c.benchmark_group("scan");
  let large = DOC_LARGE.repeat(20);

  group.bench_with_input(BenchmarkId::new("scan", "small"), &DOC_SMALL, |b, doc| {
    b.iter(|| scan(black_box(doc)));
  });
  group.bench_with_input(
    BenchmarkId::new("scan", "large"),
    &large.as_str(),
    |b, doc| {
      b.iter(|| scan(black_box(doc)));
    },
  );

  group.finish();
}

fn bench_assemble(c: &mut Criterion) {
  let mut group = c.benchmark_group("assemble");
  let primary = PrimaryColor::default();

  for (name, doc) in [("small", DOC_SMALL), ("large", DOC_LARGE)] {
    group.bench_with_input(BenchmarkId::new("assemble", name), &doc, |b, doc| {
      b.iter(|| assemble(black_box(doc), black_box(&primary)));
    });
  }

  let processor = LayoutProcessor::new(LayoutOptions::default());
  group.bench_with_input(
    BenchmarkId::new("render_platform", "large"),
    &DOC_LARGE,
    |b, doc| {
      b.iter(|| processor.render(black_box(doc)));
    },
  );

  group.finish();
}

criterion_group!(benches, bench_scan, bench_assemble);
criterion_main!(benches);
