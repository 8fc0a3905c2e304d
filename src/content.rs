//! Embedded portfolio content and the lookup surface over it
//!
//! The content tables live next to the annotator on purpose: each
//! experience or education entry carries the keyword set used to
//! emphasize its own highlight strings, and [`Portfolio`] wires the
//! two together so a host UI only renders spans.

use crate::error::{ContentError, ContentResult};
use crate::models::{
    AnnotatedText, EducationEntry, EducationExtra, ExperienceEntry, ExtraKind, Language, Metric,
    Profile, Project, TechGroup,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            period: "Apr 2022 - Present".to_string(),
            title: "Data Scientist".to_string(),
            company: "Phiture GmbH".to_string(),
            location: "Berlin, Germany".to_string(),
            keywords: strings(&[
                "Catchbase",
                "Apple Ads",
                "SaaS product",
                "Adobe",
                "LEGO",
                "Pinger",
                "reinforcement learning systems for Apple Ads",
                "experiments and incrementality tests using causal inference",
                "GCP",
                "MLflow",
                "FastAPI",
                "Docker",
                "behavior data for HBO",
                "identify churn drivers",
                "multiple Looker Studio reports",
                "reshaped user retention strategy",
                "machine learning",
                "experiment design",
            ]),
            highlights: strings(&[
                "Developed Catchbase, Phiture's proprietary Apple Ads optimization engine, now a core SaaS product used by global brands including Adobe, LEGO, and Pinger",
                "Built and deployed reinforcement learning systems for Apple Ads campaign management",
                "Designed and evaluated experiments and incrementality tests using causal inference for Adobe, eToro, and others",
                "Built end-to-end ML pipelines using GCP, MLflow, FastAPI, and Docker",
                "Analyzed user behavior data for HBO apps to identify churn drivers and inform retention strategy",
                "Created and maintained multiple Looker Studio reports for internal teams and clients",
                "Conducted data audits across multiple clients and surfaced insights that reshaped user retention strategy",
                "Led workshops on machine learning and experiment design",
            ]),
        },
        ExperienceEntry {
            period: "Jul 2024 - Sep 2024".to_string(),
            title: "Data Scientist – Disaster Risk & Climate Impact Analysis".to_string(),
            company: "USAID".to_string(),
            location: "Freelance Project".to_string(),
            keywords: strings(&[
                "Data Scientist – Disaster Risk & Climate Impact Analysis",
                "damage assessment analysis",
                "following Storm Daniel",
                "satellite, geospatial, and climate datasets",
                "Co-authored and delivered a detailed policy report",
            ]),
            highlights: strings(&[
                "Conducted a comprehensive damage assessment analysis in Eastern Libya following Storm Daniel",
                "Analyzed satellite, geospatial, and climate datasets to assess infrastructure vulnerability",
                "Co-authored and delivered a detailed policy report with actionable recommendations to enhance disaster preparedness and infrastructure resilience",
            ]),
        },
        ExperienceEntry {
            period: "Jan 2022 - Mar 2022".to_string(),
            title: "Teaching Assistant - Data Science".to_string(),
            company: "Le Wagon".to_string(),
            location: "Berlin, Germany".to_string(),
            keywords: strings(&[
                "Teaching Assistant - Data Science",
                "A/B Testing",
                "TDD",
                "CI/CD",
            ]),
            highlights: strings(&[
                "Helped students practice concepts such as A/B Testing, Evaluation Metrics, TDD, CI/CD, and ML model training and validation",
                "Reviewed teaching material and suggested improvements and changes",
                "Assisted students with daily coding challenges and offered technical support",
            ]),
        },
        ExperienceEntry {
            period: "Apr 2021 - Mar 2022".to_string(),
            title: "Data Analyst".to_string(),
            company: "50Hertz Transmission GmbH".to_string(),
            location: "Berlin, Germany".to_string(),
            keywords: strings(&["Data Analyst", "ETL", "Azure DevOps", "EDIFACT"]),
            highlights: strings(&[
                "Developed ETL pipelines for energy data, completely eliminating the manual reporting process",
                "Created and maintained the team's codebase on Azure DevOps",
                "Built custom Python modules for parsing EDIFACT text files",
            ]),
        },
    ]
}

fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            period: "Jan 2025 - Jul 2026".to_string(),
            degree: "MSc in Data Science".to_string(),
            institution: "University of Colorado Boulder".to_string(),
            location: "Online".to_string(),
            keywords: vec![],
            extras: vec![],
        },
        EducationEntry {
            period: "Oct 2021 - Dec 2021".to_string(),
            degree: "Diploma in Data Science".to_string(),
            institution: "Le Wagon Coding Bootcamp - Batch #735".to_string(),
            location: "Berlin, Germany".to_string(),
            keywords: strings(&[
                "Diploma in Data Science",
                "Hollywood Frame by Frame: A Deep Dive into On-Screen Diversity",
            ]),
            extras: vec![EducationExtra {
                kind: ExtraKind::Project,
                title: Some(
                    "Hollywood Frame by Frame: A Deep Dive into On-Screen Diversity".to_string(),
                ),
                description: "Used deep learning to analyze keyframes in over 200 Hollywood films and generated dashboards showing statistics on gender and race distribution (Final project)".to_string(),
            }],
        },
        EducationEntry {
            period: "Jan 2016 - Jan 2020".to_string(),
            degree: "BSc in Civil Engineering".to_string(),
            institution: "Technische Universität Berlin".to_string(),
            location: "Berlin, Germany".to_string(),
            keywords: strings(&[
                "BSc in Civil Engineering",
                "Temperature-based Retention Time Prediction (Bachelor Thesis, 1,0)",
                "Created a novel algorithm",
                "Python workshop for post-grad students",
            ]),
            extras: vec![
                EducationExtra {
                    kind: ExtraKind::Thesis,
                    title: Some(
                        "Temperature-based Retention Time Prediction (Bachelor Thesis, 1,0)"
                            .to_string(),
                    ),
                    description: "Created a novel algorithm for calculating retention times in pressure pipes using temperature time series data".to_string(),
                },
                EducationExtra {
                    kind: ExtraKind::Additional,
                    title: None,
                    description: "Python workshop for post-grad students: Led a workshop that introduced post-grad students to Python at the faculty of civil engineering at the TU Berlin".to_string(),
                },
            ],
        },
    ]
}

fn skills() -> Vec<String> {
    strings(&[
        "Python",
        "SQL",
        "Machine Learning",
        "Google Cloud Platform",
        "Docker",
        "A/B Testing",
        "Causal Inference",
        "Amplitude",
        "Looker Studio",
    ])
}

fn languages() -> Vec<Language> {
    vec![
        Language {
            name: "Arabic".to_string(),
            level: "Native".to_string(),
        },
        Language {
            name: "English".to_string(),
            level: "Fluent".to_string(),
        },
        Language {
            name: "German".to_string(),
            level: "Fluent".to_string(),
        },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "catchbase".to_string(),
            title: "Catchbase".to_string(),
            subtitle: "AI-Powered Apple Ads Optimization with Reinforcement Learning".to_string(),
            category: "Reinforcement Learning".to_string(),
            period: "2022 - Present".to_string(),
            client: Some("Adobe, TripAdvisor, Pinger, onX & more".to_string()),
            tags: strings(&[
                "Reinforcement Learning",
                "PPO",
                "Simulation",
                "Python",
                "Stable Baselines3",
                "OpenAI Gym",
                "Google Cloud Platform",
                "MLflow",
                "FastAPI",
                "Docker",
            ]),
            summary: "Catchbase is an Apple Search Ads optimization platform built at Phiture. It uses reinforcement learning to automatically manage bidding across thousands of keywords, trained in a custom simulation environment. The system manages over $500K in monthly ad spend for clients including Adobe and TripAdvisor.".to_string(),
            metrics: vec![
                Metric {
                    label: "Monthly Ad Spend".to_string(),
                    value: "$500K+".to_string(),
                },
                Metric {
                    label: "CPI Reduction".to_string(),
                    value: "-23%".to_string(),
                },
                Metric {
                    label: "Decisions/Day".to_string(),
                    value: "10K+".to_string(),
                },
                Metric {
                    label: "Active Campaigns".to_string(),
                    value: "200+".to_string(),
                },
            ],
            tech_stack: vec![
                TechGroup {
                    category: "Reinforcement Learning".to_string(),
                    items: strings(&["PPO", "Stable Baselines3", "OpenAI Gym", "Custom Simulation"]),
                },
                TechGroup {
                    category: "Backend".to_string(),
                    items: strings(&["Python", "FastAPI", "SQLAlchemy", "Celery"]),
                },
                TechGroup {
                    category: "Infrastructure".to_string(),
                    items: strings(&["GCP", "Cloud Run", "BigQuery", "Cloud Scheduler"]),
                },
                TechGroup {
                    category: "MLOps".to_string(),
                    items: strings(&["MLflow", "Docker", "GitHub Actions"]),
                },
            ],
        },
        Project {
            id: "taqarib".to_string(),
            title: "Storm Daniel Damage Assessment".to_string(),
            subtitle: "USAID Disaster Risk Analysis for Eastern Libya".to_string(),
            category: "Data Analysis".to_string(),
            period: "July - September 2024".to_string(),
            client: Some("USAID".to_string()),
            tags: strings(&[
                "Geospatial Analysis",
                "Python",
                "Google Earth Engine",
                "BigQuery",
                "Satellite Data",
                "Climate Analysis",
                "Disaster Response",
                "GIS",
                "Data Visualization",
            ]),
            summary: "A retrospective analysis supporting USAID's disaster preparedness initiative, conducted nearly a year after Storm Daniel devastated Eastern Libya in September 2023. Covers damage assessment across five municipalities, disaster-readiness evaluation, and policy recommendations, with geospatial and climate analysis over satellite imagery and municipal data.".to_string(),
            metrics: vec![
                Metric {
                    label: "Municipalities Analyzed".to_string(),
                    value: "5".to_string(),
                },
                Metric {
                    label: "Buildings Assessed".to_string(),
                    value: "3,900+".to_string(),
                },
                Metric {
                    label: "Project Duration".to_string(),
                    value: "3 months".to_string(),
                },
                Metric {
                    label: "Years of Climate Data".to_string(),
                    value: "23".to_string(),
                },
            ],
            tech_stack: vec![
                TechGroup {
                    category: "Geospatial".to_string(),
                    items: strings(&["GeoPandas", "Shapely", "Folium", "Google Earth Engine"]),
                },
                TechGroup {
                    category: "Data".to_string(),
                    items: strings(&["Python", "Pandas", "NumPy", "BigQuery"]),
                },
                TechGroup {
                    category: "Visualization".to_string(),
                    items: strings(&["Plotly", "Matplotlib", "Seaborn"]),
                },
                TechGroup {
                    category: "Sources".to_string(),
                    items: strings(&["NASA MODIS", "Copernicus EMS", "CHIRPS", "OpenStreetMap"]),
                },
            ],
        },
        Project {
            id: "hollywood-frame-by-frame".to_string(),
            title: "Hollywood Frame by Frame".to_string(),
            subtitle: "Analyzing Gender & Race Representation in Cinema with Deep Learning"
                .to_string(),
            category: "Deep Learning".to_string(),
            period: "2021".to_string(),
            client: None,
            tags: strings(&[
                "Deep Learning",
                "Computer Vision",
                "TensorFlow",
                "MTCNN",
                "DeepFace",
                "Python",
                "GCP",
                "Streamlit",
                "Web Scraping",
            ]),
            summary: "A deep learning pipeline that quantifies on-screen representation in Hollywood films. The system scrapes frames from 200+ movies, detects faces using MTCNN, and classifies each face by gender and race using fine-tuned DeepFace models.".to_string(),
            metrics: vec![
                Metric {
                    label: "Movies Analyzed".to_string(),
                    value: "200+".to_string(),
                },
                Metric {
                    label: "Male Screen Time".to_string(),
                    value: "84%".to_string(),
                },
                Metric {
                    label: "Female Screen Time".to_string(),
                    value: "16%".to_string(),
                },
                Metric {
                    label: "Training Images".to_string(),
                    value: "200K".to_string(),
                },
            ],
            tech_stack: vec![
                TechGroup {
                    category: "Deep Learning".to_string(),
                    items: strings(&["TensorFlow 2.5", "DeepFace", "MTCNN", "facenet-pytorch"]),
                },
                TechGroup {
                    category: "Data Collection".to_string(),
                    items: strings(&["Selenium", "BeautifulSoup", "Requests"]),
                },
                TechGroup {
                    category: "Cloud Infrastructure".to_string(),
                    items: strings(&["GCP Storage", "BigQuery"]),
                },
                TechGroup {
                    category: "Frontend".to_string(),
                    items: strings(&["Streamlit"]),
                },
            ],
        },
    ]
}

/// The built-in content set.
#[must_use]
pub fn embedded_profile() -> Profile {
    Profile {
        experience: experience(),
        education: education(),
        skills: skills(),
        languages: languages(),
        projects: projects(),
    }
}

/// Read-only handle over a content set, exposed across the FFI
/// boundary. Lookups clone; annotation runs on demand.
#[derive(Debug, uniffi::Object)]
pub struct Portfolio {
    profile: Profile,
}

#[uniffi::export]
impl Portfolio {
    /// Create a portfolio over the built-in content set.
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Self {
        Self {
            profile: embedded_profile(),
        }
    }

    #[must_use]
    pub fn experience(&self) -> Vec<ExperienceEntry> {
        self.profile.experience.clone()
    }

    #[must_use]
    pub fn education(&self) -> Vec<EducationEntry> {
        self.profile.education.clone()
    }

    #[must_use]
    pub fn skills(&self) -> Vec<String> {
        self.profile.skills.clone()
    }

    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        self.profile.languages.clone()
    }

    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.profile.projects.clone()
    }

    /// Look up a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::ProjectNotFound`] for an unknown id.
    pub fn project(&self, id: &str) -> ContentResult<Project> {
        self.profile
            .find_project(id)
            .cloned()
            .ok_or_else(|| ContentError::project_not_found(id))
    }

    /// Annotate every highlight string of one experience entry with
    /// that entry's keyword set.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidIndex`] if `index` is out of range.
    pub fn annotated_highlights(&self, index: u32) -> ContentResult<Vec<AnnotatedText>> {
        let entry = self
            .profile
            .experience
            .get(index as usize)
            .ok_or(ContentError::InvalidIndex)?;

        Ok(entry
            .highlights
            .iter()
            .map(|line| AnnotatedText::annotate(line.as_str(), &entry.keywords))
            .collect())
    }

    /// Annotate the extras (project, thesis, additional notes) of one
    /// education entry with that entry's keyword set. Titled extras
    /// contribute both their title and description.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidIndex`] if `index` is out of range.
    pub fn annotated_extras(&self, index: u32) -> ContentResult<Vec<AnnotatedText>> {
        let entry = self
            .profile
            .education
            .get(index as usize)
            .ok_or(ContentError::InvalidIndex)?;

        let mut annotated = Vec::new();
        for extra in &entry.extras {
            if let Some(title) = &extra.title {
                annotated.push(AnnotatedText::annotate(title.as_str(), &entry.keywords));
            }
            annotated.push(AnnotatedText::annotate(
                extra.description.as_str(),
                &entry.keywords,
            ));
        }
        Ok(annotated)
    }
}

impl Portfolio {
    /// Wrap an externally supplied content set.
    #[must_use]
    pub const fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}
