//! Sample-data seeding for demo deployments.
//!
//! The seeder talks to the stores only through `count`, `insert_all` and `find_by_role`, so it
//! works against any [`UserRepository`] / [`InterviewRepository`] pair.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use recruitment::interviews::{InterviewRepository, NewInterview, UNSCORED};
use recruitment::repository::RepositoryError;
use recruitment::users::{NewUser, Role, UserRepository};
use serde::Serialize;
use tracing::{info, warn};

/// Users generated per seeding pass.
const USER_BATCH: u64 = 50;
/// Offsets below this within a batch become candidates.
const CANDIDATES_PER_BATCH: u64 = 30;
/// Offsets below this (and at or above the candidate cut) become recruiters; the rest are admins.
const STAFF_CUTOFF: u64 = 48;
/// Interviews are created for 7 in 10 candidates, rounded down.
const INTERVIEW_RATIO: (usize, usize) = (7, 10);
/// Chance that a generated interview already carries a score.
const SCORED_RATIO: (u32, u32) = (7, 10);

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Jessica", "William", "Ashley",
    "James", "Amanda", "Christopher", "Stephanie", "Daniel", "Jennifer", "Matthew", "Elizabeth",
    "Anthony", "Heather", "Mark", "Nicole", "Donald", "Samantha", "Steven", "Rachel", "Paul",
    "Amy", "Andrew", "Angela", "Joshua", "Brenda", "Kenneth", "Emma", "Kevin", "Olivia", "Brian",
    "Cynthia", "George", "Marie", "Edward", "Janet", "Ronald", "Catherine", "Timothy", "Frances",
    "Jason", "Christine", "Jeffrey", "Deborah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
    "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera",
    "Campbell", "Mitchell", "Carter",
];

const DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "company.com",
    "email.com",
    "mail.com",
    "example.com",
    "test.com",
    "domain.com",
];

const JOB_TITLES: &[&str] = &[
    "Software Developer",
    "Senior Java Developer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Product Manager",
    "UI/UX Designer",
    "Quality Assurance Engineer",
    "System Administrator",
    "Database Administrator",
    "Business Analyst",
    "Project Manager",
    "Technical Lead",
    "Software Architect",
    "Mobile Developer",
    "Cloud Engineer",
    "Security Engineer",
    "Machine Learning Engineer",
];

const CV_TEMPLATES: &[&str] = &[
    "Experienced professional with 5+ years in software development. Skilled in Java, Spring Boot, and microservices architecture.",
    "Passionate developer with expertise in modern web technologies. Strong background in React, Node.js, and cloud platforms.",
    "Senior engineer with proven track record in enterprise applications. Specializes in system design and team leadership.",
    "Full-stack developer with experience in both frontend and backend technologies. Committed to clean code and best practices.",
    "Results-driven professional with strong analytical skills. Experience in agile methodologies and continuous integration.",
    "Creative problem solver with expertise in user experience design. Strong collaboration and communication skills.",
    "Detail-oriented engineer with focus on performance optimization and scalability. Experience with distributed systems.",
    "Innovative developer passionate about emerging technologies. Strong foundation in computer science fundamentals.",
    "Experienced team player with leadership capabilities. Proven ability to deliver complex projects on time.",
    "Versatile professional with broad technical skills. Adaptable to new technologies and changing requirements.",
];

const ADMIN_INFO: &str = "System Administrator with full access privileges.";

/// Positions are the job titles minus the generic "Software Developer".
fn positions() -> &'static [&'static str] {
    &JOB_TITLES[1..]
}

/// Controls for a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SeedOptions {
    pub(crate) target_users: u64,
    /// Fixed RNG seed; a random one is drawn and logged when absent.
    pub(crate) rng_seed: Option<u64>,
}

/// Summary of what a seeding pass created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct SeedReport {
    pub(crate) rng_seed: u64,
    pub(crate) candidates: usize,
    pub(crate) recruiters: usize,
    pub(crate) admins: usize,
    pub(crate) scored_interviews: usize,
    pub(crate) unscored_interviews: usize,
    pub(crate) total_users: u64,
    pub(crate) total_interviews: u64,
}

/// Top up the stores with generated users and interviews.
///
/// Users are generated only while the store holds fewer than `target_users`; interviews only when
/// the interview store is empty and both candidates and recruiters exist.
pub(crate) fn run<U, I>(
    users: &U,
    interviews: &I,
    options: SeedOptions,
) -> Result<SeedReport, RepositoryError>
where
    U: UserRepository + ?Sized,
    I: InterviewRepository + ?Sized,
{
    let rng_seed = options.rng_seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut report = SeedReport {
        rng_seed,
        ..SeedReport::default()
    };

    let existing_users = users.count()?;
    if existing_users < options.target_users {
        info!(
            existing_users,
            target = options.target_users,
            rng_seed,
            "populating sample users"
        );
        let batch = sample_users(&mut rng, existing_users + 1);
        for user in &batch {
            match user.role() {
                Role::Candidate => report.candidates += 1,
                Role::Recruiter => report.recruiters += 1,
                Role::Admin => report.admins += 1,
            }
        }
        users.insert_all(batch)?;
        info!(
            candidates = report.candidates,
            recruiters = report.recruiters,
            admins = report.admins,
            "created sample users"
        );
    } else {
        info!(existing_users, "user store already populated; skipping users");
    }

    let existing_interviews = interviews.count()?;
    if existing_interviews == 0 {
        seed_interviews(&mut rng, users, interviews, &mut report)?;
    } else {
        info!(
            existing_interviews,
            "interview store already populated; skipping interviews"
        );
    }

    report.total_users = users.count()?;
    report.total_interviews = interviews.count()?;
    Ok(report)
}

fn seed_interviews<U, I>(
    rng: &mut ChaCha8Rng,
    users: &U,
    interviews: &I,
    report: &mut SeedReport,
) -> Result<(), RepositoryError>
where
    U: UserRepository + ?Sized,
    I: InterviewRepository + ?Sized,
{
    let candidates = users.find_by_role(Role::Candidate)?;
    let recruiters = users.find_by_role(Role::Recruiter)?;
    if candidates.is_empty() || recruiters.is_empty() {
        warn!(
            candidates = candidates.len(),
            recruiters = recruiters.len(),
            "cannot create sample interviews without candidates and recruiters"
        );
        return Ok(());
    }

    let (numerator, denominator) = INTERVIEW_RATIO;
    let wanted = candidates.len() * numerator / denominator;
    let mut batch = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let Some(candidate) = candidates.choose(rng) else {
            break;
        };
        let position = pick(rng, positions());
        let score = if rng.random_ratio(SCORED_RATIO.0, SCORED_RATIO.1) {
            rng.random_range(1..=100)
        } else {
            UNSCORED
        };
        batch.push(NewInterview::scored(candidate.id, position, score));
    }

    report.scored_interviews = batch.iter().filter(|i| i.score != UNSCORED).count();
    report.unscored_interviews = batch.len() - report.scored_interviews;
    interviews.insert_all(batch)?;
    info!(
        scored = report.scored_interviews,
        unscored = report.unscored_interviews,
        "created sample interviews"
    );
    Ok(())
}

/// One batch of users numbered from `start_index`: candidates, then recruiters, then admins.
fn sample_users(rng: &mut ChaCha8Rng, start_index: u64) -> Vec<NewUser> {
    (0..USER_BATCH)
        .map(|offset| {
            let index = start_index + offset;
            let first = pick(rng, FIRST_NAMES);
            let last = pick(rng, LAST_NAMES);
            let domain = pick(rng, DOMAINS);
            let name = format!("{first} {last}");
            let email = format!(
                "{}{}{index}@{domain}",
                first.to_lowercase(),
                last.to_lowercase()
            );

            if offset < CANDIDATES_PER_BATCH {
                NewUser::candidate(
                    name,
                    email,
                    pick(rng, JOB_TITLES),
                    pick(rng, CV_TEMPLATES),
                )
            } else if offset < STAFF_CUTOFF {
                let years: u8 = rng.random_range(1..=10);
                let info = format!(
                    "HR Professional with {years} years of experience in talent acquisition."
                );
                NewUser::staff(name, email, Role::Recruiter, info)
            } else {
                NewUser::staff(name, email, Role::Admin, ADMIN_INFO)
            }
        })
        .collect()
}

fn pick(rng: &mut ChaCha8Rng, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}
