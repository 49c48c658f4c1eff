use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lit_core::SegmenterConfig;
use lit_parser::{works, Segmenter, SourceText};
use rand::Rng;

const SENTENCES: &[&str] = &[
    "Grace is not earned but given freely.",
    "The will of man, without grace, is not free but bound.",
    "He that would follow me must walk not in darkness.",
    "This is a longer sentence that runs on for a while so that paragraphs vary in size and the segmenter has realistic amounts of body text to collect.",
];

fn paragraph(rng: &mut impl Rng) -> String {
    let n = rng.gen_range(3..12);
    (0..n)
        .map(|_| SENTENCES[rng.gen_range(0..SENTENCES.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_parts(parts: usize, sections: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::from("THE BONDAGE OF THE WILL\n\nBY MARTIN LUTHER\n\n");
    for p in 1..=parts {
        text.push_str(&format!("PART {}.\n\n", "I".repeat(p.min(3))));
        for s in 0..sections {
            text.push_str(&format!("SECTION HEADING NUMBER {}\n\n", "X".repeat(s % 3 + 1)));
            for _ in 0..rng.gen_range(2..8) {
                text.push_str(&paragraph(&mut rng));
                text.push_str("\n\n");
            }
            text.push_str("  17  \n\n");
        }
    }
    text.push_str("*** END OF THE PROJECT GUTENBERG EBOOK ***\n");
    text
}

fn bench_segment(c: &mut Criterion) {
    let profile = works::bondage_of_the_will().unwrap();
    let segmenter = Segmenter::new(profile.rules, SegmenterConfig::default());
    let small = SourceText::from_text(&generate_parts(3, 10));
    let large = SourceText::from_text(&generate_parts(3, 200));

    c.bench_function("segment_parts_small", |b| {
        b.iter(|| black_box(segmenter.segment(black_box(&small)).unwrap()))
    });
    c.bench_function("segment_parts_large", |b| {
        b.iter(|| black_box(segmenter.segment(black_box(&large)).unwrap()))
    });
}

fn bench_fallback(c: &mut Criterion) {
    // No PART/SECT headings match the primary rules: forces the retry.
    let profile = works::bondage_of_the_will().unwrap();
    let segmenter = Segmenter::new(profile.rules, SegmenterConfig::default());
    let mut rng = rand::thread_rng();
    let mut text = String::from("PART I.\n\n");
    for i in 0..50 {
        text.push_str(&format!("GRACE {}\n\n{}\n\n", "I".repeat(i % 3 + 1), paragraph(&mut rng)));
    }
    let source = SourceText::from_text(&text);
    c.bench_function("segment_with_fallback", |b| {
        b.iter(|| black_box(segmenter.segment(black_box(&source)).unwrap()))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = generate_parts(3, 200).replace('\n', "\r\n");
    c.bench_function("source_normalize_crlf", |b| {
        b.iter(|| black_box(SourceText::from_text(black_box(&text))))
    });
}

criterion_group!(benches, bench_segment, bench_fallback, bench_normalize);
criterion_main!(benches);
