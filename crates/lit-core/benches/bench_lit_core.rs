use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lit_core::{flatten, Body, Book, Document, Section};
use rand::Rng;

fn generate_document(books: usize, chapters: usize) -> Document {
    let mut rng = rand::thread_rng();
    let books = (0..books)
        .map(|b| {
            let mut book = Book::new(format!("BOOK {}", b + 1));
            for c in 0..chapters {
                let words = rng.gen_range(200..2000);
                let content = "lorem ipsum dolor ".repeat(words);
                book.chapters.push(Section::new(format!("CHAPTER {}", c + 1), content));
            }
            book
        })
        .collect();
    Document::new("Bench", Body::Books(books)).with_author("Anon")
}

fn bench_serialize(c: &mut Criterion) {
    let doc = generate_document(4, 25);
    c.bench_function("document_to_pretty_json", |b| {
        b.iter(|| black_box(serde_json::to_string_pretty(black_box(&doc)).unwrap()))
    });
}

fn bench_flatten(c: &mut Criterion) {
    let doc = generate_document(4, 25);
    c.bench_function("flatten_rows", |b| b.iter(|| black_box(flatten(black_box(&doc)))));
}

criterion_group!(benches, bench_serialize, bench_flatten);
criterion_main!(benches);
