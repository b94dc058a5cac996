//! Debug script to inspect one search page and its video details
//!
//! Usage: YT_API_KEY=... cargo run -p tagsweep-core --example probe_search -- dsc 1

use tagsweep_core::{
    LogicalQuery, SearchService, VideoDetailService, WorkItem, YouTubeApi,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let tag = args.next().unwrap_or_else(|| "dsc".to_string());
    let index: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1);

    let api = YouTubeApi::from_env()?;
    let item = WorkItem::from(LogicalQuery::new(&tag, index));

    println!("Searching for {}...\n", item.query.rendered_text);

    let page = api.search(&item).await?;
    println!("{} ids, next page token: {:?}", page.video_ids.len(), page.next_page_token);

    let videos = api.list_details(&page.video_ids).await?;
    for video in &videos {
        println!("{}", serde_json::to_string(video)?);
    }

    Ok(())
}
