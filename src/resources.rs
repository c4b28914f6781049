// src/resources.rs
//! Static curated directory of remote-work resources, organized into
//! named categories. Pure reference data, no dynamic logic.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ResourceEntry {
    pub name: &'static str,
    pub link: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ResourceCategory {
    pub name: &'static str,
    pub entries: Vec<ResourceEntry>,
}

fn entry(name: &'static str, link: &'static str, description: &'static str) -> ResourceEntry {
    ResourceEntry {
        name,
        link,
        description,
    }
}

/// The whole directory, categories in display order.
pub fn directory() -> Vec<ResourceCategory> {
    vec![
        ResourceCategory {
            name: "Job Portals",
            entries: vec![
                entry("LinkedIn", "https://www.linkedin.com/jobs/", "Professional networking and job portal."),
                entry("Indeed", "https://www.indeed.com/", "A comprehensive job search engine."),
                entry("Glassdoor", "https://www.glassdoor.com/index.htm", "Company reviews and job listings."),
                entry("Monster", "https://www.monster.com/", "Global employment website."),
                entry("Stackoverflow", "https://stackoverflow.com/jobs", "Job board for programmers."),
                entry("RemoteOK", "https://remoteok.io/", "Remote job aggregator."),
                entry("Remote.co", "https://remote.co/remote-jobs/", "Remote job listings and resources."),
                entry("We Work Remotely", "https://weworkremotely.com/", "Remote job board."),
                entry("AngelList", "https://angel.co/", "Platform for startups to hire talent."),
                entry("Hired", "https://hired.com/", "Job search for tech talent."),
                entry("Triplebyte", "https://triplebyte.com/", "Technical recruiting platform."),
                entry("Dice", "https://www.dice.com/", "Tech job search and career hub."),
                entry("Landing.jobs", "https://landing.jobs/", "Job board for tech professionals."),
                entry("RemoteLeaf", "https://remoteleaf.com/", "Curated list of remote jobs in tech."),
                entry("Remote.com", "https://remote.com/", "Remote job platform."),
                entry("Remote Circle", "https://remotecircle.com/", "Community-driven remote job board."),
            ],
        },
        ResourceCategory {
            name: "Freelancing",
            entries: vec![
                entry("Upwork", "https://www.upwork.com/", "Freelance platform for various skills."),
                entry("Freelancer", "https://www.freelancer.com/", "Freelance jobs and contests."),
                entry("Fiverr", "https://www.fiverr.com/", "Freelance services marketplace."),
                entry("Toptal", "https://www.toptal.com/", "Freelance talent marketplace."),
                entry("Guru", "https://www.guru.com/", "Freelance marketplace for professionals."),
            ],
        },
        ResourceCategory {
            name: "Remote Companies",
            entries: vec![
                entry("GitLab", "https://about.gitlab.com/jobs/", "Web-based Git repository manager."),
                entry("Zapier", "https://zapier.com/jobs/", "Automation for busy people."),
                entry("Automattic", "https://automattic.com/work-with-us/", "Web development company known for WordPress."),
                entry("InVision", "https://www.invisionapp.com/company#jobs", "Digital product design platform."),
                entry("Hotjar", "https://careers.hotjar.com/", "Behavior analytics and user feedback platform."),
                entry("Toggl", "https://toggl.com/jobs/", "Time tracking and productivity tool."),
                entry("Doist", "https://doist.com/jobs/", "Creators of Todoist and Twist."),
                entry("Aha!", "https://www.aha.io/company/careers/current-openings", "Product roadmap software company."),
                entry("Close", "https://jobs.lever.co/close.io/", "Inside sales CRM."),
                entry("TaxJar", "https://www.taxjar.com/jobs/", "Sales tax automation software."),
                entry("DuckDuckGo", "https://duckduckgo.com/hiring/", "Privacy-focused search engine."),
                entry("Clevertech", "https://www.clevertech.biz/careers", "Remote-first technology consultancy."),
                entry("Crossover", "https://www.crossover.com/", "Remote work staffing platform."),
                entry("Scrapinghub", "https://scrapinghub.com/jobs", "Data extraction platform."),
                entry("X-Team", "https://x-team.com/join/", "Community of developers working remotely."),
                entry("Dell", "https://jobs.dell.com/", "Computer technology company."),
                entry("GitBook", "https://jobs.gitbook.com/", "Documentation platform."),
                entry("Hubstaff", "https://hubstaff.com/jobs", "Time tracking and productivity software."),
                entry("Inflow", "https://www.goinflow.com/careers/", "E-commerce digital marketing agency."),
                entry("Knack", "https://www.knack.com/careers", "No-code platform for building online databases."),
            ],
        },
        ResourceCategory {
            name: "GitHub Repositories",
            entries: vec![
                entry("Awesome Remote Job", "https://github.com/lukasz-madon/awesome-remote-job", "Curated list of awesome remote job opportunities."),
                entry("Awesome Remote Freelance", "https://github.com/kaizensoze/awesome-freelance-jobs", "Curated list of freelancing platforms."),
                entry("Awesome Remote Companies", "https://github.com/remoteintech/remote-jobs", "Curated list of companies offering remote jobs."),
                entry("Awesome Remote Work", "https://github.com/hugo53/awesome-remote-work", "Curated list of resources for remote workers."),
            ],
        },
        ResourceCategory {
            name: "Blogs",
            entries: vec![
                entry("Remote.co", "https://remote.co/", "Remote work tips, news, and resources."),
                entry("Remote OK", "https://remoteok.io/", "Remote job board and community."),
                entry("Remote Leaf", "https://remoteleaf.com/", "Curated list of remote job opportunities."),
                entry("Remote.com", "https://remote.com/", "Remote work insights and job board."),
            ],
        },
        ResourceCategory {
            name: "Podcasts",
            entries: vec![
                entry("Remote Work Life", "", "Podcast about the remote work lifestyle."),
                entry("The Remote Show", "", "Podcast featuring interviews with remote companies."),
                entry("The Remote Work Podcast", "", "Podcast discussing remote work topics."),
                entry("The Remote Work Channel", "", "Podcast covering various aspects of remote work."),
                entry("The Remote Work Podcast", "", "Podcast exploring remote work trends and challenges."),
            ],
        },
        ResourceCategory {
            name: "Communities",
            entries: vec![
                entry("Remote Work Hub", "", "Online community for remote workers."),
                entry("Remote Work Subreddit", "", "Subreddit dedicated to remote work discussions."),
                entry("Remote Work Facebook Group", "", "Facebook group for remote work enthusiasts."),
                entry("Remote Work Slack Group", "", "Slack group for remote work professionals."),
                entry("Remote Work LinkedIn Group", "", "LinkedIn group for remote work networking."),
                entry("Remote Work Meetup Group", "", "Local and virtual meetups for remote workers."),
            ],
        },
        ResourceCategory {
            name: "Books",
            entries: vec![
                entry("Remote", "", "Book by Jason Fried and David Heinemeier Hansson on remote work."),
                entry("Remote Work", "", "Book by Chris Guillebeau exploring the world of remote work."),
                entry("Remote Work Revolution", "", "Book by Tsedal Neeley on the future of remote work."),
                entry("The Year Without Pants", "", "Book by Scott Berkun about working at WordPress.com."),
                entry("The Ultimate Guide to Remote Work", "", "Book by Zapier on successful remote work practices."),
            ],
        },
        ResourceCategory {
            name: "Courses",
            entries: vec![
                entry("Remote Work Mastery", "", "Online course for mastering remote work skills."),
                entry("Remote Work School", "", "Educational platform for remote work courses."),
                entry("Remote Work Academy", "", "Academy offering courses for remote work professionals."),
                entry("Remote Work School", "", "School providing resources and courses for remote work."),
            ],
        },
    ]
}

/// Category names in display order, for the tab selector.
pub fn category_names() -> Vec<&'static str> {
    directory().into_iter().map(|c| c.name).collect()
}

/// Looks up one category by name, case-insensitively.
pub fn category(name: &str) -> Option<ResourceCategory> {
    directory()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_all_categories() {
        assert_eq!(
            category_names(),
            vec![
                "Job Portals",
                "Freelancing",
                "Remote Companies",
                "GitHub Repositories",
                "Blogs",
                "Podcasts",
                "Communities",
                "Books",
                "Courses",
            ]
        );
    }

    #[test]
    fn test_every_category_has_entries() {
        for cat in directory() {
            assert!(!cat.entries.is_empty(), "{} is empty", cat.name);
        }
    }

    #[test]
    fn test_entry_counts_per_category() {
        // Repeated names (Podcasts, Courses) are part of the data and
        // must not collapse.
        let counts: Vec<usize> = directory().iter().map(|c| c.entries.len()).collect();
        assert_eq!(counts, vec![16, 5, 20, 4, 4, 5, 6, 5, 4]);
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        assert!(category("job portals").is_some());
        assert!(category("Time Travel").is_none());
    }
}
