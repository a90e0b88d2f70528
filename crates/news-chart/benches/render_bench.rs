use news_chart::{build_figure, render_to_png_bytes, FigureStyle, RenderOptions, StyleSheet, Table};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_table(years: usize) -> Table {
    let mut csv = String::from(",Newspaper,Television,Radio,Internet\n");
    for i in 0..years {
        let t = i as f64 / years.max(1) as f64;
        csv.push_str(&format!(
            "{},{:.1},{:.1},{:.1},{:.1}\n",
            1990 + i,
            45.0 - 25.0 * t,
            74.0 - 17.0 * t,
            44.0 - 19.0 * t,
            50.0 * t,
        ));
    }
    Table::from_reader(csv.as_bytes()).expect("bench csv")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("news_png_bytes");
    for &n in &[20usize, 500usize] {
        let table = build_table(n);
        group.bench_function(format!("years_{n}"), |b| {
            let mut opts = RenderOptions::default();
            opts.draw_text = false;
            b.iter(|| {
                let fig = build_figure(&table, &StyleSheet::news(), &FigureStyle::default()).expect("build");
                let bytes = render_to_png_bytes(&fig, &opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
