//! End-to-end pipeline tests
//!
//! These exercise the complete flow over a real site tree: image
//! listings -> post index -> archive synchronization -> sitemap.

use std::fs;
use std::path::Path;

use chrono::{TimeZone, Utc};
use site_content::{BlockRule, Document, find_instances, synchronize};
use site_posts::{
    ArchiveLayout, INDEX_FILE, build_index, load_records, render_archive, write_image_listings,
    write_records,
};
use site_sitemap::generate_sitemap;
use tempfile::TempDir;

const POSTS_DIR: &str = "blog-posts";
const MARKER: &str = "<!-- Archive Section -->";

fn write_post(posts: &Path, folder: &str, title: &str, category: &str, body: &str) {
    let dir = posts.join(folder);
    fs::create_dir_all(&dir).unwrap();
    let html = format!(
        "<html><body>\
         <div class=\"post-title\"><h1>{title}</h1></div>\
         <div class=\"post-category\">{category}</div>\
         <div class=\"post-content-text\"><p>{body}</p></div>\
         </body></html>"
    );
    fs::write(dir.join(format!("{folder}.html")), html).unwrap();
}

/// Set up a site with two posts, one of them carrying images.
fn setup_site() -> TempDir {
    let temp = TempDir::new().unwrap();
    let posts = temp.path().join(POSTS_DIR);

    write_post(&posts, "post1", "Older entry", "Guides", "The first article.");
    write_post(&posts, "post2", "Newer entry", "Travel", "The second article.");
    fs::write(posts.join("post2/thumbnail.png"), b"png").unwrap();
    fs::write(posts.join("post2/chart.jpg"), b"jpg").unwrap();
    fs::write(posts.join("post2/notes.txt"), b"txt").unwrap();

    fs::write(
        temp.path().join("index.html"),
        "<html>\n<head></head>\n<body>\n  <main>Welcome</main>\n  <!-- Footer -->\n</body>\n</html>\n",
    )
    .unwrap();

    temp
}

fn archive_rule() -> BlockRule {
    BlockRule::new(
        MARKER,
        vec!["<!-- Footer -->".to_string(), "</body>".to_string()],
    )
}

fn archive_layout() -> ArchiveLayout {
    ArchiveLayout {
        marker: MARKER.to_string(),
        heading: "Archive".to_string(),
        posts_dir: POSTS_DIR.to_string(),
    }
}

/// Run every pipeline stage against the tree and return the landing page.
fn run_pipeline(root: &Path) -> String {
    let posts = root.join(POSTS_DIR);

    write_image_listings(&posts).unwrap();

    let records = build_index(&posts).unwrap();
    write_records(&posts.join(INDEX_FILE), &records).unwrap();

    let page_path = root.join("index.html");
    let document = fs::read_to_string(&page_path).unwrap();
    let rendered = render_archive(&records, &archive_layout());
    let (updated, _report) = synchronize(&document, &archive_rule(), &rendered).unwrap();
    fs::write(&page_path, &updated).unwrap();

    let generated_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let xml = generate_sitemap(root, "https://example.com", POSTS_DIR, &[], generated_at).unwrap();
    fs::write(root.join("sitemap.xml"), &xml).unwrap();

    updated
}

#[test]
fn full_pipeline_produces_every_artifact() {
    let temp = setup_site();
    let posts = temp.path().join(POSTS_DIR);

    let page = run_pipeline(temp.path());

    // 1. Image listings: only image files, sorted, empty folders included
    let listing: Vec<String> =
        serde_json::from_str(&fs::read_to_string(posts.join("post2/images.json")).unwrap())
            .unwrap();
    assert_eq!(listing, vec!["chart.jpg", "thumbnail.png"]);
    let empty: Vec<String> =
        serde_json::from_str(&fs::read_to_string(posts.join("post1/images.json")).unwrap())
            .unwrap();
    assert!(empty.is_empty());

    // 2. Post index: numbered folders newest first, metadata extracted
    let records = load_records(&posts.join(INDEX_FILE)).unwrap();
    let folders: Vec<&str> = records.iter().map(|r| r.folder.as_str()).collect();
    assert_eq!(folders, vec!["post2", "post1"]);
    assert_eq!(records[0].title, "Newer entry");
    assert_eq!(records[0].category, "travel");
    assert_eq!(records[0].thumbnail, "post2/thumbnail.png");
    assert_eq!(records[1].thumbnail, "");

    // 3. Archive block: one managed block, anchored above the footer
    assert_eq!(page.matches(MARKER).count(), 1);
    assert!(page.contains("href=\"blog-posts/post2/\""));
    assert!(page.contains("src=\"blog-posts/post2/thumbnail.png\""));
    let marker_at = page.find(MARKER).unwrap();
    let footer_at = page.find("<!-- Footer -->").unwrap();
    assert!(marker_at < footer_at);

    // 4. Sitemap: post pages at 0.90, root index at 1.00
    let xml = fs::read_to_string(temp.path().join("sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://example.com/</loc>"));
    assert!(xml.contains("<loc>https://example.com/blog-posts/post1/post1.html</loc>"));
    assert!(xml.contains("<lastmod>2024-06-01T12:00:00Z</lastmod>"));
    assert!(xml.contains("<priority>1.00</priority>"));
    assert!(xml.contains("<priority>0.90</priority>"));
}

#[test]
fn pipeline_is_idempotent_end_to_end() {
    let temp = setup_site();

    let first = run_pipeline(temp.path());
    let first_index =
        fs::read_to_string(temp.path().join(POSTS_DIR).join(INDEX_FILE)).unwrap();
    let first_sitemap = fs::read_to_string(temp.path().join("sitemap.xml")).unwrap();

    let second = run_pipeline(temp.path());
    let second_index =
        fs::read_to_string(temp.path().join(POSTS_DIR).join(INDEX_FILE)).unwrap();
    let second_sitemap = fs::read_to_string(temp.path().join("sitemap.xml")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_index, second_index);
    assert_eq!(first_sitemap, second_sitemap);
}

#[test]
fn drifted_page_is_repaired_on_the_next_run() {
    let temp = setup_site();
    let page_path = temp.path().join("index.html");

    let page = run_pipeline(temp.path());

    // Simulate hand-edit drift: duplicate the whole managed block
    let doc = Document::parse(&page);
    let instances = find_instances(doc.lines(), &archive_rule());
    assert_eq!(instances.len(), 1);
    let block: Vec<String> = doc.lines()[instances[0].start..instances[0].end].to_vec();
    let mut drifted_lines: Vec<String> = doc.lines().to_vec();
    drifted_lines.splice(instances[0].end..instances[0].end, block);
    let drifted = format!("{}\n", drifted_lines.join("\n"));
    assert_eq!(drifted.matches(MARKER).count(), 2);
    fs::write(&page_path, &drifted).unwrap();

    let repaired = run_pipeline(temp.path());
    assert_eq!(repaired.matches(MARKER).count(), 1);
    assert_eq!(repaired, page);
}

#[test]
fn new_post_shows_up_after_a_rerun() {
    let temp = setup_site();
    let posts = temp.path().join(POSTS_DIR);

    let page = run_pipeline(temp.path());
    assert!(!page.contains("post3"));

    write_post(&posts, "post3", "Newest entry", "Guides", "The third article.");
    let page = run_pipeline(temp.path());

    // The new post leads the archive, and only one block exists
    assert_eq!(page.matches(MARKER).count(), 1);
    let third_at = page.find("href=\"blog-posts/post3/\"").unwrap();
    let second_at = page.find("href=\"blog-posts/post2/\"").unwrap();
    assert!(third_at < second_at);
}

#[test]
fn page_content_outside_the_block_survives_resync() {
    let temp = setup_site();

    run_pipeline(temp.path());

    // Hand-edit outside the managed region
    let page_path = temp.path().join("index.html");
    let page = fs::read_to_string(&page_path).unwrap();
    let edited = page.replace("<main>Welcome</main>", "<main>Welcome back</main>");
    fs::write(&page_path, &edited).unwrap();

    let resynced = run_pipeline(temp.path());
    assert!(resynced.contains("<main>Welcome back</main>"));
}
