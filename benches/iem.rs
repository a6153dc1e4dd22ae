use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iem::{parse_observations, DataField, ObservationFrame, WeatherQuery};

fn payload(rows: usize) -> String {
    let mut out = String::from("station,valid,tmpf,dwpf,relh,drct,sknt,alti,vsby,skyc1,skyl1,metar\n");
    for i in 0..rows {
        let minute = i % 60;
        let hour = (i / 60) % 24;
        let tmpf = if i % 17 == 0 {
            "M".to_string()
        } else {
            format!("{:.2}", 20.0 + (i % 40) as f64)
        };
        out.push_str(&format!(
            "DSM,2024-01-15 {hour:02}:{minute:02},{tmpf},10.00,68.50,310.00,12.00,30.12,10.00,BKN,2500.00,KDSM 151254Z 31012KT 10SM BKN025\n"
        ));
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let query = WeatherQuery::new().station("DSM").fields(DataField::ALL);
    let data = payload(10_000);

    c.bench_function("parse_observations", |b| {
        b.iter(|| parse_observations(black_box(data.as_bytes()), &query))
    });

    let observations = parse_observations(data.as_bytes(), &query).unwrap();
    c.bench_function("observation_frame", |b| {
        b.iter(|| ObservationFrame::from_observations(black_box(&observations)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
