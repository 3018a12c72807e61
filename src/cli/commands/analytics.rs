//! Search analytics commands.

use tokio::runtime::Runtime;

use super::open_analytics;
use crate::config::Config;

/// Show the most frequent recorded searches
pub fn cmd_top_searches(rt: &Runtime, config: &Config, limit: u32, json: bool) -> anyhow::Result<()> {
    rt.block_on(async {
        let Some(analytics) = open_analytics(config).await? else {
            anyhow::bail!("Search analytics are disabled in the configuration");
        };
        let rows = analytics.top_searches(limit).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }
        if rows.is_empty() {
            println!("No searches recorded yet.");
            return Ok(());
        }

        for (rank, row) in rows.iter().enumerate() {
            println!(
                "{:>2}. {:<24} {:>5}x  -> {} (#{})",
                rank + 1,
                row.search_term,
                row.count,
                row.title,
                row.movie_id
            );
        }
        Ok(())
    })
}
