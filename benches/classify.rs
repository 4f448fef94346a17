// benches/classify.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cne_scrape::core::html::page_text;
use cne_scrape::specs::{Classifier, PageLayout, PositionalLayout, Verdict};

const REGISTERED: &str = "<html><body>\n\
    <p>CONSULTA DE DATOS</p>\n\
    <p>Cédula: V-12.000.000</p>\n\
    <p>Nombre: JUAN JOSE PEREZ</p>\n\
    <p>Estado: EDO. MIRANDA</p>\n\
    <p>Municipio: MP. SUCRE</p>\n\
    <p>Parroquia: PQ. PETARE</p>\n\
    <p>Centro: U.E. JOSE MARTI</p>\n\
    <p>Dirección: CALLE REAL DE PETARE FRENTE A LA PLAZA</p>\n\
    <p>Impresión de Consulta de Datos</p>\n\
    </body></html>";

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::new();
    let text = page_text(REGISTERED);

    c.bench_function("page_text", |b| {
        b.iter(|| black_box(page_text(black_box(REGISTERED))).len())
    });

    c.bench_function("classify_registered", |b| {
        b.iter(|| {
            let v = classifier.classify("V-12000000", black_box(&text));
            black_box(matches!(v, Ok(Verdict::Registered)))
        })
    });

    c.bench_function("positional_layout", |b| {
        b.iter(|| {
            let r = PositionalLayout.parse("V-12000000", black_box(&text));
            black_box(r.is_ok())
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
