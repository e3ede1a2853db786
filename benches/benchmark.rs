//! Performance benchmarks for snippet-extract.
//!
//! Run with: `cargo bench`
//!
//! - A small synthetic article page for the full pipeline
//! - Scoring alone on the same page
//! - Synthetic pages of growing size to watch the locator's scaling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use snippet_extract::dom::Document;
use snippet_extract::scoring::score;
use snippet_extract::{extract_main_content, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <script>window.tracking = true;</script>
</head>
<body>
    <nav class="main-nav">
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains enough meaningful
        content that the extractor should keep it in the snippet output.</p>
        <p>Here is a second paragraph with more content. The extraction should
        preserve the text while removing navigation and other boilerplate.</p>
        <p>A third paragraph ensures we have enough content for meaningful
        benchmarking of the extraction performance. It ends here.</p>
    </article>
    <div class="sidebar">
        <h3>Related</h3>
        <ul><li>Related article 1</li><li>Related article 2</li></ul>
    </div>
    <footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract_main_content(black_box(SAMPLE_HTML.as_bytes())));
    });
}

fn bench_score_article(c: &mut Criterion) {
    let options = Options::default();
    let Ok(doc) = Document::load(SAMPLE_HTML) else {
        return;
    };
    let Some(&article) = doc.elements_by_tag("article").first() else {
        return;
    };
    c.bench_function("score_article", |b| {
        b.iter(|| score(black_box(&doc), black_box(article), black_box(&options)));
    });
}

/// Nested div soup with no candidate selectors, forcing the fallback scan.
fn synthetic_page(blocks: usize) -> String {
    let para = "A sentence of filler text that reads like prose. Another one follows it. ";
    let mut html = String::from("<html><body>");
    for i in 0..blocks {
        html.push_str(&format!("<div class=\"b{i}\"><div><p>{para}{para}</p></div></div>"));
    }
    html.push_str("</body></html>");
    html
}

fn bench_fallback_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback_scaling");
    for blocks in [10, 100, 500] {
        let html = synthetic_page(blocks);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", blocks), &html, |b, html| {
            b.iter(|| extract_main_content(black_box(html.as_bytes())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_score_article,
    bench_fallback_scaling
);
criterion_main!(benches);
