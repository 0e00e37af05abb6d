/// HTML fragments for the result sections

use serde_json::Value;

use crate::format::{NOT_AVAILABLE, escape_html, format_category, format_count};
use crate::models::{
    RankData, Scalar, SimilarSite, SimilarSitesResponse, Traffic, WebsiteDetails, parse_or_default,
};
use crate::pipeline::{Category, QueryResults};

/// An output region of the page, addressed by element id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    WebsiteDetails,
    Traffic,
    Rank,
    SimilarSites,
    Other(String),
}

impl Region {
    pub fn id(&self) -> &str {
        match self {
            Region::WebsiteDetails => "websiteDetailsData",
            Region::Traffic => "trafficData",
            Region::Rank => "rankData",
            Region::SimilarSites => "similarSitesData",
            Region::Other(id) => id.as_str(),
        }
    }

    pub fn from_id(id: &str) -> Region {
        match id {
            "websiteDetailsData" => Region::WebsiteDetails,
            "trafficData" => Region::Traffic,
            "rankData" => Region::Rank,
            "similarSitesData" => Region::SimilarSites,
            other => Region::Other(other.to_string()),
        }
    }

    pub fn for_category(category: Category) -> Region {
        match category {
            Category::WebsiteDetails => Region::WebsiteDetails,
            Category::Traffic => Region::Traffic,
            Category::Rank => Region::Rank,
            Category::SimilarSites => Region::SimilarSites,
        }
    }
}

/// One populated section
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub region: Region,
    pub html: String,
}

/// Everything the results container shows after a lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResults {
    pub heading: String,
    pub sections: Vec<RenderedSection>,
}

impl RenderedResults {
    pub fn section(&self, region: &Region) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| &s.region == region)
            .map(|s| s.html.as_str())
    }
}

pub fn results_heading(domain: &str) -> String {
    format!("Results for {}", domain)
}

/// Render all four sections in slot order
pub fn render_results(domain: &str, results: &QueryResults) -> RenderedResults {
    let sections = Category::ALL
        .into_iter()
        .map(|category| {
            let region = Region::for_category(category);
            let html = render(&region, results.get(category));
            RenderedSection { region, html }
        })
        .collect();

    RenderedResults {
        heading: results_heading(domain),
        sections,
    }
}

/// Render `payload` for `region`
///
/// Never fails: a missing payload, wrong shape or missing field shows "N/A".
pub fn render(region: &Region, payload: Option<&Value>) -> String {
    match region {
        Region::WebsiteDetails => render_website_details(&parse_or_default(payload)),
        Region::Traffic => render_traffic(&parse_or_default(payload)),
        Region::Rank => render_rank(&parse_or_default(payload)),
        Region::SimilarSites => render_similar_sites(similar_sites(payload).as_deref()),
        Region::Other(_) => render_raw(payload),
    }
}

fn text_or_na(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.is_empty() => escape_html(t),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn scalar_or_na(value: Option<&Scalar>) -> String {
    match value {
        Some(v) if v.is_present() => escape_html(&v.to_string()),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn count_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_count)
}

fn render_website_details(details: &WebsiteDetails) -> String {
    let mut html = String::from("<h3>Website Details</h3>\n");
    html.push_str(&format!(
        "<p><strong>Title:</strong> {}</p>\n",
        text_or_na(details.title.as_deref())
    ));
    html.push_str(&format!(
        "<p><strong>Description:</strong> {}</p>\n",
        text_or_na(details.description.as_deref())
    ));
    html.push_str(&format!(
        "<p><strong>Category:</strong> {}</p>\n",
        escape_html(&format_category(details.category.as_deref()))
    ));
    if let Some(src) = details.screenshot() {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"Website Screenshot\" style=\"max-width: 100%; height: auto; margin-top: 10px;\">\n",
            escape_html(src)
        ));
    }
    html
}

fn render_traffic(traffic: &Traffic) -> String {
    format!(
        "<h3>This Month Traffic</h3>\n<p><strong>Visits:</strong> {}</p>\n",
        count_or_na(traffic.visits)
    )
}

fn render_rank(rank: &RankData) -> String {
    let country = rank.country_rank.as_ref();
    format!(
        "<h3>Rank Data</h3>\n\
         <p><strong>Global Rank:</strong> {}</p>\n\
         <p><strong>Country Rank:</strong> {} ({})</p>\n\
         <p><strong>Category Rank:</strong> {}</p>\n",
        scalar_or_na(rank.global_rank.as_ref()),
        scalar_or_na(country.and_then(|c| c.rank.as_ref())),
        scalar_or_na(country.and_then(|c| c.country.as_ref())),
        scalar_or_na(rank.category_rank.as_ref().and_then(|c| c.rank.as_ref())),
    )
}

// Accepts either the endpoint body or the bare `SimilarSites` array.
// `None` when there is no list at all, as opposed to an empty one.
fn similar_sites(payload: Option<&Value>) -> Option<Vec<SimilarSite>> {
    match payload {
        Some(Value::Array(_)) => Some(parse_or_default::<Vec<SimilarSite>>(payload)),
        _ => parse_or_default::<SimilarSitesResponse>(payload).similar_sites,
    }
}

fn render_similar_sites(sites: Option<&[SimilarSite]>) -> String {
    let sites = match sites {
        Some(sites) if !sites.is_empty() => sites,
        Some(_) => {
            return "<h3>Similar Sites</h3>\n<p>No similar sites data available.</p>\n".to_string();
        }
        None => {
            return format!(
                "<h3>Similar Sites</h3>\n<p>No similar sites data available.</p>\n<p><strong>Sites:</strong> {}</p>\n",
                NOT_AVAILABLE
            );
        }
    };

    let mut html = String::from("<h3>Similar Sites</h3>\n<ul>\n");
    for site in sites {
        html.push_str(&format!(
            "<li>\n<strong>{}</strong><br>\n<em>{}</em><br>\n<span>Global Rank: {}</span><br>\n<span>Visits: {}</span>\n</li>\n",
            text_or_na(site.domain.as_deref()),
            text_or_na(site.title.as_deref()),
            scalar_or_na(site.global_rank.as_ref()),
            count_or_na(site.visits),
        ));
    }
    html.push_str("</ul>\n");
    html
}

fn render_raw(payload: Option<&Value>) -> String {
    let pretty = serde_json::to_string_pretty(payload.unwrap_or(&Value::Null))
        .unwrap_or_else(|_| "null".to_string());
    format!("<pre>{}</pre>", escape_html(&pretty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_region_ids_round_trip() {
        for region in [Region::WebsiteDetails, Region::Traffic, Region::Rank, Region::SimilarSites] {
            assert_eq!(Region::from_id(region.id()), region);
        }
        assert_eq!(Region::from_id("debugData"), Region::Other("debugData".to_string()));
    }

    #[test]
    fn test_null_payload_renders_na_for_every_known_region() {
        for region in [Region::WebsiteDetails, Region::Traffic, Region::Rank, Region::SimilarSites] {
            let html = render(&region, None);
            assert!(html.contains("N/A"), "{} should show N/A: {}", region.id(), html);
        }
        let html = render(&Region::SimilarSites, None);
        assert!(html.contains("No similar sites data available."));
    }

    #[test]
    fn test_wrong_shape_payload_renders_na() {
        let payload = json!("unexpected");
        assert!(render(&Region::Traffic, Some(&payload)).contains("<strong>Visits:</strong> N/A"));
        assert!(render(&Region::Rank, Some(&payload)).contains("<strong>Global Rank:</strong> N/A"));
    }

    #[test]
    fn test_render_website_details() {
        let payload = json!({
            "Title": "Google",
            "Description": "Search the world's information",
            "Category": "computers_electronics_and_technology/search_engines",
            "Images": {"Desktop": "https://img.test/google.png"}
        });

        let html = render(&Region::WebsiteDetails, Some(&payload));

        assert!(html.contains("<h3>Website Details</h3>"));
        assert!(html.contains("<p><strong>Title:</strong> Google</p>"));
        assert!(html.contains("<p><strong>Description:</strong> Search the world&#39;s information</p>"));
        assert!(html.contains("<p><strong>Category:</strong> Computers Electronics And Technology / Search Engines</p>"));
        assert!(html.contains("<img src=\"https://img.test/google.png\" alt=\"Website Screenshot\""));
    }

    #[test]
    fn test_website_details_without_screenshot() {
        let payload = json!({"Title": "", "Images": {"Desktop": ""}});

        let html = render(&Region::WebsiteDetails, Some(&payload));

        assert!(html.contains("<p><strong>Title:</strong> N/A</p>"));
        assert!(html.contains("<p><strong>Category:</strong> N/A</p>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_render_traffic_uses_separators() {
        let payload = json!({"Visits": 85123456789u64});
        let html = render(&Region::Traffic, Some(&payload));
        assert!(html.contains("<p><strong>Visits:</strong> 85,123,456,789</p>"));
    }

    #[test]
    fn test_render_rank() {
        let payload = json!({
            "GlobalRank": 1,
            "CountryRank": {"Rank": 2, "Country": "US"},
            "CategoryRank": {"Rank": 1}
        });

        let html = render(&Region::Rank, Some(&payload));

        assert!(html.contains("<p><strong>Global Rank:</strong> 1</p>"));
        assert!(html.contains("<p><strong>Country Rank:</strong> 2 (US)</p>"));
        assert!(html.contains("<p><strong>Category Rank:</strong> 1</p>"));
    }

    #[test]
    fn test_render_rank_partial() {
        let payload = json!({"GlobalRank": 0, "CountryRank": {"Country": "DE"}});

        let html = render(&Region::Rank, Some(&payload));

        assert!(html.contains("<p><strong>Global Rank:</strong> N/A</p>"));
        assert!(html.contains("<p><strong>Country Rank:</strong> N/A (DE)</p>"));
        assert!(html.contains("<p><strong>Category Rank:</strong> N/A</p>"));
    }

    #[test]
    fn test_render_similar_sites() {
        let payload = json!({
            "SimilarSites": [
                {"Domain": "bing.com", "Title": "Bing", "GlobalRank": 30, "Visits": 1200000},
                {"Domain": "<script>"}
            ]
        });

        let html = render(&Region::SimilarSites, Some(&payload));

        assert!(html.contains("<ul>"));
        assert!(html.contains("<strong>bing.com</strong>"));
        assert!(html.contains("<em>Bing</em>"));
        assert!(html.contains("<span>Global Rank: 30</span>"));
        assert!(html.contains("<span>Visits: 1,200,000</span>"));
        assert!(html.contains("<strong>&lt;script&gt;</strong>"));
        assert!(html.contains("<span>Visits: N/A</span>"));
    }

    #[test]
    fn test_render_similar_sites_bare_array_and_empty() {
        let payload = json!([{"Domain": "bing.com"}]);
        assert!(render(&Region::SimilarSites, Some(&payload)).contains("<strong>bing.com</strong>"));

        let empty = json!({"SimilarSites": []});
        let html = render(&Region::SimilarSites, Some(&empty));
        assert!(html.contains("No similar sites data available."));
        assert!(!html.contains("N/A"));
    }

    #[test]
    fn test_other_region_dumps_payload() {
        let payload = json!({"a": 1});
        let html = render(&Region::Other("debugData".to_string()), Some(&payload));
        assert_eq!(html, "<pre>{\n  &quot;a&quot;: 1\n}</pre>");

        assert_eq!(render(&Region::Other("debugData".to_string()), None), "<pre>null</pre>");
    }

    #[test]
    fn test_render_results_orders_sections() {
        let results = QueryResults::default();

        let rendered = render_results("example.com", &results);

        assert_eq!(rendered.heading, "Results for example.com");
        let regions: Vec<&Region> = rendered.sections.iter().map(|s| &s.region).collect();
        assert_eq!(
            regions,
            vec![&Region::WebsiteDetails, &Region::Traffic, &Region::Rank, &Region::SimilarSites]
        );
        assert!(rendered.section(&Region::Traffic).unwrap().contains("Visits:</strong> N/A"));
    }
}
