use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use polycure::batch::{BatchAssembler, BatchInputs, Category};
use polycure::chemistry::CompoundDatabase;
use polycure::ingest::{CellValue, RawSheet, SheetIngestor};
use polycure::report::LogSink;
use polycure::schema::{columns, sheets};

const COMPOUNDS: &str = "\
SMILES,Component,Density (g/mL),Mwt. (g/mol)
C1C=CC2C1C3CC2C=C3,Dicyclopentadiene,0.98,132.2
CC=C1CC2CC1C=C2,5-Ethylidene-2-norbornene,0.893,120.19
GC2,Grubbs 2nd generation,,848.97
Cc1ccccc1,Toluene,0.867,92.14
";

fn header(names: &[&str]) -> Vec<CellValue> {
    names.iter().map(|&n| CellValue::from(n)).collect()
}

/// Build the input sheets of a batch with `rows` monomer and additive rows
fn create_inputs(rows: usize) -> BatchInputs {
    let mut monomers = vec![header(&[
        columns::NAME,
        columns::SMILES,
        columns::MEASURED_MASS_G,
        columns::MEASURED_VOLUME_UL,
    ])];
    let mut additives = monomers.clone();
    for i in 0..rows {
        let smiles = if i % 2 == 0 { "C1C=CC2C1C3CC2C=C3" } else { "CC=C1CC2CC1C=C2" };
        monomers.push(vec![
            CellValue::from(format!("monomer {}", i)),
            CellValue::from(smiles),
            CellValue::from(10.0 + i as f64),
            CellValue::from("-"),
        ]);
        additives.push(vec![
            CellValue::from(format!("additive {}", i)),
            CellValue::from("Cc1ccccc1"),
            CellValue::from("-"),
            CellValue::from(100.0 + i as f64),
        ]);
    }
    let catalysts = vec![
        header(&[columns::NAME, columns::SMILES, columns::MEASURED_MASS_MG]),
        vec![CellValue::from("Grubbs II"), CellValue::from("GC2"), CellValue::from(10.0)],
    ];

    let mut ingestor = SheetIngestor::new(LogSink);
    let mut inputs = BatchInputs::new();
    for (category, title, cells) in [
        (Category::Monomers, sheets::MONOMERS, monomers),
        (Category::Additives, sheets::ADDITIVES, additives),
        (Category::Catalysts, sheets::CATALYSTS, catalysts),
    ] {
        let sheet = RawSheet::new(title, cells);
        inputs.insert(category, ingestor.read_inputs(&sheet).unwrap());
    }
    inputs
}

/// Benchmark computing the derived records of a batch
fn bench_compute_values(c: &mut Criterion) {
    let db = CompoundDatabase::from_reader(COMPOUNDS.as_bytes()).unwrap();
    let mut group = c.benchmark_group("compute_values");

    for rows in [10, 100, 1000] {
        let inputs = create_inputs(rows);
        group.throughput(Throughput::Elements(rows as u64 * 2 + 1));

        group.bench_with_input(BenchmarkId::from_parameter(format!("{}rows", rows)), &inputs, |b, inputs| {
            b.iter(|| {
                let mut assembler = BatchAssembler::new(&db, LogSink);
                black_box(assembler.compute_values(black_box(inputs)).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_values);
criterion_main!(benches);
