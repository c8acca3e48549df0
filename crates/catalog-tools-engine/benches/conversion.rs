use catalog_tools_engine::{ConversionOptions, DescriptionRow, convert_descriptions, text_to_html};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn generate_description(sections: usize) -> String {
    let section = "# Nazwa produktu\n\nKrótki opis z **pogrubieniem** oraz *kursywą*.\nDruga linia tego samego akapitu.\n\nCechy produktu:\n- Wysoka jakość\n- Gwarancja __2 lata__\n\n1. Rozpakuj\n2) Używaj\n\n";
    section.repeat(sections)
}

fn bench_text_to_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_to_html");
    let options = ConversionOptions::default();

    for sections in [1, 10, 100] {
        let text = generate_description(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &text, |b, text| {
            b.iter(|| text_to_html(Some(std::hint::black_box(text)), &options));
        });
    }

    group.finish();
}

fn bench_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_descriptions");
    group.sample_size(10);

    let text = generate_description(2);
    let rows: Vec<DescriptionRow> = (0..1000)
        .map(|i| DescriptionRow::new(format!("590{i:010}"), text.clone()))
        .collect();

    group.bench_function("1000_rows", |b| {
        b.iter(|| {
            let report = convert_descriptions(
                std::hint::black_box(rows.clone()),
                &Default::default(),
                &ConversionOptions::default(),
            );
            std::hint::black_box(report);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_text_to_html, bench_sheet);
criterion_main!(benches);
