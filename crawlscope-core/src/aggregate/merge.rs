use crate::aggregate::state::{AggregationState, keep_latest};

impl AggregationState {
    /// Fold in a state built from input that came after ours.
    ///
    /// Counters add up, first-crawl times keep our value, last-crawl times
    /// take the later one, histories and first-seen orders append. Merging
    /// chunk states in input order therefore gives the same result as one
    /// sequential pass over the concatenated input.
    pub fn merge(&mut self, other: AggregationState) {
        self.lines.total += other.lines.total;
        self.lines.parsed += other.lines.parsed;
        self.lines.rejected += other.lines.rejected;

        self.url_visits.merge(other.url_visits);
        self.status_codes.merge(other.status_codes);
        self.user_agents.merge(other.user_agents);
        self.bot_visits.merge(other.bot_visits);

        for (bot, urls) in other.bot_urls {
            self.bot_urls.entry(bot).or_default().merge(urls);
        }

        for (bot, codes) in other.bot_status_codes {
            let mine = self.bot_status_codes.entry(bot).or_default();
            for (status, n) in codes {
                *mine.entry(status).or_insert(0) += n;
            }
        }

        for (url, ts) in other.url_first_crawl {
            self.url_first_crawl.entry(url).or_insert(ts);
        }

        for (url, ts) in other.url_last_crawl {
            keep_latest(&mut self.url_last_crawl, &url, ts);
        }

        for (url, bots) in other.url_crawl_by_bot {
            let mine = self.url_crawl_by_bot.entry(url).or_default();
            for (bot, n) in bots {
                *mine.entry(bot).or_insert(0) += n;
            }
        }

        for (bot, urls) in other.bot_url_last_crawl {
            let mine = self.bot_url_last_crawl.entry(bot).or_default();
            for (url, ts) in urls {
                keep_latest(mine, &url, ts);
            }
        }

        for (url, history) in other.url_status_history {
            self.url_status_history
                .entry(url)
                .or_default()
                .extend(history);
        }

        for (status, urls) in other.error_urls {
            self.error_urls.entry(status).or_default().merge(urls);
        }

        for (bot, days) in other.bot_daily_visits {
            let mine = self.bot_daily_visits.entry(bot).or_default();
            for (day, n) in days {
                *mine.entry(day).or_insert(0) += n;
            }
        }

        for (depth, n) in other.googlebot_crawl_depth {
            *self.googlebot_crawl_depth.entry(depth).or_insert(0) += n;
        }
    }
}
