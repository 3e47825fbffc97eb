//! Incentive quote CLI.
//!
//! Evaluate the engine against the default economics or a TOML config, for
//! support staff and for checking a config change before rollout.

#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;

    use anyhow::Result;
    use clap::{Parser, Subcommand};
    use incentive_engine::{
        format_bps, ActionKind, Complexity, Credits, EconomicsConfig, IncentiveEngine,
        MissionType, NewsSubmission, ProductTier, Quality, RewardBreakdown, SocialEngagement,
    };

    #[derive(Parser)]
    #[command(name = "incentive-quote")]
    #[command(about = "Quote purchases, staking yield, rewards and levels")]
    pub struct Cli {
        /// Economics config file (TOML); defaults to the built-in deployment values
        #[arg(short, long, global = true)]
        pub config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long, global = true)]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Subcommand)]
    pub enum Command {
        /// Credits granted for a purchase
        Purchase {
            /// Amount paid
            amount: Credits,
        },

        /// Staking yield for a position
        Stake {
            /// Amount staked
            principal: Credits,

            /// Commitment length in months
            #[arg(short, long, default_value = "12")]
            months: u32,

            /// Product tier (basic, project, research)
            #[arg(short, long, default_value = "basic")]
            tier: ProductTier,

            /// Staker's level, to include the level APY bonus
            #[arg(short, long)]
            level: Option<u32>,
        },

        /// Reward for a social share
        Social {
            #[arg(long, default_value = "0")]
            likes: u64,

            #[arg(long, default_value = "0")]
            shares: u64,

            /// Post was marked viral by moderation
            #[arg(long)]
            viral: bool,
        },

        /// Reward for a completed referral
        Referral {
            /// Referrals the referrer had completed before this one
            prior_referrals: u64,
        },

        /// Reward for a completed mission
        Mission {
            /// vacancy, task, news_submission or partnership
            mission_type: MissionType,

            /// low, medium or high
            #[arg(short, long, default_value = "low")]
            complexity: Complexity,

            /// low, medium or high
            #[arg(short, long, default_value = "low")]
            quality: Quality,

            /// Completed before the deadline
            #[arg(long)]
            early: bool,
        },

        /// Reward for a news submission
        News {
            #[arg(long)]
            approved: bool,

            #[arg(long)]
            published: bool,

            #[arg(long)]
            relevant: bool,

            /// Submitter's first submission
            #[arg(long)]
            first: bool,
        },

        /// Level, progress and benefits for an XP total
        Level {
            xp: u64,
        },

        /// Whether one more action fits the daily limit
        Limit {
            /// social_share or news_submission
            action: ActionKind,

            /// Actions already rewarded today
            count: u32,
        },

        /// Print the default economics config as TOML
        DefaultConfig,
    }

    pub fn run(cli: Cli) -> Result<()> {
        let level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();

        let config = match &cli.config {
            Some(path) => EconomicsConfig::load(path)?,
            None => EconomicsConfig::default(),
        };
        let engine = IncentiveEngine::new(config)?;

        match cli.command {
            Command::Purchase { amount } => {
                let quote = engine.quote_purchase(amount);
                println!("Purchase Quote");
                println!("==============");
                println!("Paid:      {}", quote.input_amount);
                println!("Discount:  {}", format_bps(quote.discount_bps));
                println!("Granted:   {}", quote.tokens_granted);
                println!("Savings:   {}", quote.savings);
            }
            Command::Stake {
                principal,
                months,
                tier,
                level,
            } => {
                let quote = match level {
                    Some(level) => engine.quote_staking_for_level(principal, months, tier, level)?,
                    None => engine.quote_staking(principal, months, tier)?,
                };
                println!("Staking Quote ({tier}, {months} months)");
                println!("==============");
                println!("Principal: {principal}");
                println!("APY:       {}", format_bps(quote.apy_bps));
                println!("Annual:    {}", quote.annual_reward);
                println!("Total:     {}", quote.total_reward);
                println!("Monthly:   {}", quote.monthly_reward);
            }
            Command::Social {
                likes,
                shares,
                viral,
            } => {
                let breakdown = engine.social_share_reward(SocialEngagement {
                    likes,
                    shares,
                    marked_viral: viral,
                });
                print_breakdown("Social Share Reward", &breakdown);
            }
            Command::Referral { prior_referrals } => {
                let reward = engine.referral_reward(prior_referrals);
                println!("Referral Reward ({} tier)", reward.tier);
                println!("===============");
                println!("Referrer:  {}", reward.referrer);
                println!("Referred:  {}", reward.referred);
            }
            Command::Mission {
                mission_type,
                complexity,
                quality,
                early,
            } => {
                let breakdown = engine.mission_reward(mission_type, complexity, early, quality);
                print_breakdown("Mission Reward", &breakdown);
            }
            Command::News {
                approved,
                published,
                relevant,
                first,
            } => {
                let breakdown = engine.news_submission_reward(NewsSubmission {
                    approved,
                    published,
                    highly_relevant: relevant,
                    first_submission: first,
                });
                print_breakdown("News Submission Reward", &breakdown);
            }
            Command::Level { xp } => {
                let progress = engine.level_progress(xp);
                let benefits = engine.benefits_of(progress.level)?;
                println!("Level {}", progress.level);
                println!("=======");
                println!("XP:               {}", progress.xp);
                match progress.next_threshold {
                    Some(next) => println!("Next level at:    {next} ({} to go)", progress.xp_to_next),
                    None => println!("Next level at:    max level reached"),
                }
                println!("Staking bonus:    {}", format_bps(benefits.staking_apy_bonus_bps));
                println!("Priority support: {}", benefits.priority_support);
            }
            Command::Limit { action, count } => {
                let allowed = engine.can_perform(action, count);
                println!(
                    "{action}: {} ({} of {} remaining)",
                    if allowed { "allowed" } else { "daily limit reached" },
                    engine.remaining_actions(action, count),
                    engine.config().limits.ceiling(action),
                );
            }
            Command::DefaultConfig => {
                print!("{}", EconomicsConfig::default().to_toml()?);
            }
        }
        Ok(())
    }

    fn print_breakdown(title: &str, breakdown: &RewardBreakdown) {
        println!("{title}");
        println!("{:=<width$}", "", width = title.len());
        println!("{:<18} {:>10}", "base", breakdown.base.to_string());
        for bonus in &breakdown.bonuses {
            println!("{:<18} {:>10}", bonus.kind.as_str(), bonus.amount.to_string());
        }
        println!("{:-<18} {:-<10}", "", "");
        println!("{:<18} {:>10}", "total", breakdown.total.to_string());
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    let cli = cli::Cli::parse();
    cli::run(cli)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary requires the 'cli' feature. Build with:");
    eprintln!("  cargo build -p incentive-engine --features cli --bin incentive-quote");
}
