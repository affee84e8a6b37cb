// tests/specs_html.rs
use job_scrape::scrape::merge_pages;
use job_scrape::specs::detail::parse_detail;
use job_scrape::specs::listing::{pagination_urls, parse_listing, SALARY_NOT_FOUND};

const LISTING: &str = r#"<!DOCTYPE html>
<html><head><title>Việc làm Data</title></head><body>
<div class="main-slider"><a class="job_link" href="/ads/banner">promo</a></div>
<div class="jobs-side-list">
  <div class="job-item has-badge" id="job-item-1">
    <div class="figure"><div class="image"><img src="/logo1.png"></div>
      <div class="figcaption">
        <div class="title"><h2><a class="job_link" href="/vi/tim-viec-lam/data-analyst.35B9A1.html" title="Data Analyst">Data Analyst</a></h2>
          <span class="new">(Mới)</span></div>
        <div class="caption">
          <a class="company-name" href="/nha-tuyen-dung/abc.html">Công Ty TNHH ABC</a>
          <div class="location"><ul><li>Hà Nội</li>
<li>Hồ Chí Minh</li></ul></div>
          <div class="salary"><p><em class="fa fa-usd"></em>Lương: 15 Tr - 25 Tr VND</p></div>
          <div class="time"><ul>
            <li><em class="mdi mdi-update"></em>Cập nhật: <time>05-03-2025</time></li>
            <li><em class="mdi mdi-calendar"></em>Hạn nộp: <time>31-03-2025</time></li>
          </ul></div>
          <ul class="welfare"><li><span class="fa fa-laptop"></span>Laptop</li><li>Chế độ bảo hiểm</li></ul>
        </div>
      </div>
    </div>
  </div>
  <div class="job-item" id="job-item-2">
    <div class="title"><h2><a class="job_link" href="https://careerviet.vn/vi/tim-viec-lam/bi-engineer.35B9A2.html">BI Engineer</a></h2></div>
    <a class="company-name" href="/nha-tuyen-dung/xyz.html">XYZ Corp</a>
    <div class="location">Đà Nẵng</div>
  </div>
</div>
</body></html>"#;

const DETAIL: &str = r#"<!DOCTYPE html>
<html><body>
<section class="job-detail-content">
  <div class="job-info"><ul>
    <li>Cấp bậc: Nhân viên</li>
    <li>Hình thức: Nhân viên chính thức</li>
    <li>Kinh nghiệm: 2 - 5 Năm</li>
    <li>Ngành nghề: Ngân hàng</li>
  </ul></div>
  <div class="job-description">
    <h3>Mô tả Công việc</h3>
    <p>Collect, clean and analyze sales data from several regional systems.</p>
    <p>Build weekly dashboards in Power BI and present insights to management.</p>
  </div>
  <div class="job-requirements">
    <h3>Yêu Cầu Công Việc</h3>
    <ul><li>At least 2 years with SQL and Python</li><li>Good communication and teamwork</li></ul>
  </div>
</section>
</body></html>"#;

#[test]
fn listing_page_yields_cards_in_order() {
    let jobs = parse_listing(LISTING).unwrap();
    assert_eq!(jobs.len(), 2, "banner link outside a job card is ignored");

    let a = &jobs[0];
    assert_eq!(a.title, "Data Analyst");
    assert_eq!(a.company, "Công Ty TNHH ABC");
    assert_eq!(a.link, "https://careerviet.vn/vi/tim-viec-lam/data-analyst.35B9A1.html");
    assert!(a.location.contains("Hà Nội") && a.location.contains("Hồ Chí Minh"));
    assert_eq!(a.salary, "15 Tr - 25 Tr VND");
    assert_eq!(a.date, "05-03-2025");
    assert_eq!(a.expire, "31-03-2025");
    assert_eq!(a.welfare, vec!["Laptop".to_string(), "Chế độ bảo hiểm".to_string()]);

    let b = &jobs[1];
    assert_eq!(b.title, "BI Engineer");
    assert_eq!(b.salary, SALARY_NOT_FOUND);
}

#[test]
fn detail_page_fills_posting() {
    let mut job = parse_listing(LISTING).unwrap().remove(0);
    let detail = parse_detail(DETAIL).unwrap();
    detail.apply_to(&mut job);

    assert_eq!(job.level, "nhân viên");
    assert_eq!(job.industry, "ngân hàng");
    assert!(job.description.contains("Collect, clean and analyze sales data"));
    assert!(job.description.contains("Power BI"));
    assert!(job.requirements.contains("SQL and Python"));
    assert!(!job.requirements.contains("dashboards"));
}

fn detailed_listing() -> Vec<job_scrape::posting::JobPosting> {
    let mut jobs = parse_listing(LISTING).unwrap();
    for job in &mut jobs {
        parse_detail(DETAIL).unwrap().apply_to(job);
    }
    jobs
}

#[test]
fn pages_merge_in_page_order_with_cap() {
    let page1 = detailed_listing();
    let page2 = vec![page1[1].clone()];
    // Page 2 finished first; the merge still leads with page 1.
    let merged = merge_pages(vec![(1, page2), (0, page1)], 10);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].title, "Data Analyst");

    let capped = merge_pages(vec![(0, detailed_listing())], 1);
    assert_eq!(capped.len(), 1);
}

#[test]
fn postings_without_detail_text_are_dropped() {
    let bare = parse_listing(LISTING).unwrap();
    assert!(merge_pages(vec![(0, bare)], 10).is_empty());
}

#[test]
fn pagination_for_search_url() {
    let urls = pagination_urls("https://careerviet.vn/viec-lam/data-analyst-k-vi.html", 2);
    assert_eq!(urls.len(), 2);
    assert!(urls[1].ends_with("data-analyst-k-trang-2-vi.html"));
}
