//! The keyword table driving categorization.

pub const MISC_CATEGORY: &str = "Miscellaneous & Other Topics";

/// Dropped before counting keyword frequency within a category.
pub const STOP_WORDS: &[&str] = &["and", "the", "to", "in", "for", "with", "on", "of", "a", "from", "by"];

/// Declaration order is significant: it breaks score ties.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "AI & Machine Learning",
        &[
            "ai", "machine learning", "neural", "deep learning", "llm", "language model",
            "transformer", "gpt", "claude", "gemini", "llama", "mistral", "training",
            "fine-tuning", "inference", "embeddings", "rag", "hallucination", "generative ai",
            "foundation model", "multimodal", "synthetic data", "nlp", "natural language",
        ],
    ),
    (
        "Hardware & Infrastructure",
        &[
            "hardware", "cpu", "gpu", "dgx", "tpu", "h100", "h200", "b100", "blackwell",
            "hopper", "grace", "server", "cluster", "supercomputer", "data center", "cooling",
            "liquid", "rack", "memory", "hbm", "infrastructure", "accelerator", "compute",
            "performance", "benchmark", "power",
        ],
    ),
    (
        "Software & Development",
        &[
            "software", "programming", "development", "sdk", "api", "library", "framework",
            "cuda", "driver", "compiler", "microservice", "container", "docker", "kubernetes",
            "devops", "mlops", "testing", "debugging", "deployment", "platform", "architecture",
            "design pattern", "workflow", "pipeline", "code", "developer",
        ],
    ),
    (
        "Industry Applications",
        &[
            "healthcare", "medical", "finance", "banking", "retail", "manufacturing",
            "automotive", "energy", "telecom", "aerospace", "defense", "media", "entertainment",
            "game", "insurance", "agriculture", "transportation", "industry", "business",
            "enterprise", "commercial", "solution", "customer", "production",
        ],
    ),
    (
        "Research & Innovation",
        &[
            "research", "innovation", "breakthrough", "novel", "paper", "publication",
            "algorithm", "method", "technique", "experiment", "benchmark", "evaluation",
            "assessment", "improvement", "enhanced", "academic", "advance", "frontier",
            "state-of-the-art", "sota", "cutting-edge",
        ],
    ),
    (
        "Robotics & Autonomous Systems",
        &[
            "robot", "robotics", "autonomous", "automation", "self-driving", "drone", "uav",
            "control", "sensor", "perception", "motion", "navigation", "grasping",
            "manipulation", "humanoid", "embodied", "physical", "mechanical", "actuator",
            "motor", "kinematic",
        ],
    ),
    (
        "HPC & Scientific Computing",
        &[
            "hpc", "high performance", "scientific", "simulation", "modeling", "computational",
            "physics", "chemistry", "biology", "weather", "climate", "earth", "astronomy",
            "parallel", "distributed", "exascale", "petascale", "supercomputing", "numerical",
            "mathematical", "equation", "differential",
        ],
    ),
    (
        "Computer Vision & Graphics",
        &[
            "vision", "image", "video", "graphics", "rendering", "ray tracing", "visualization",
            "3d", "ar", "vr", "xr", "mixed reality", "segmentation", "detection", "recognition",
            "tracking", "rtx", "omniverse", "camera", "depth", "scene", "mesh", "texture",
            "animation",
        ],
    ),
    (
        "Security & Privacy",
        &[
            "security", "privacy", "encryption", "secure", "threat", "vulnerabil", "risk",
            "attack", "defense", "protection", "compliance", "regulation", "gdpr",
            "authentication", "authorization", "identity", "trusted", "safe", "reliable",
            "robust",
        ],
    ),
    (
        "Networking & Communication",
        &[
            "network", "networking", "communication", "5g", "6g", "wifi", "ethernet",
            "protocol", "bandwidth", "latency", "throughput", "connection", "internet", "iot",
            "edge", "cloud", "distributed", "federated", "connectivity", "wireless", "signal",
            "transmission",
        ],
    ),
    (
        "Quantum Computing",
        &[
            "quantum", "qubit", "quantum computing", "quantum machine learning",
            "quantum algorithm", "quantum simulation", "quantum error correction",
            "superposition", "entanglement", "quantum supremacy", "quantum advantage",
        ],
    ),
    (
        "Data Science & Analytics",
        &[
            "data science", "analytics", "data analysis", "big data", "data engineering", "etl",
            "database", "sql", "nosql", "data lake", "data warehouse", "data visualization",
            "dashboard", "reporting", "business intelligence", "bi", "metrics", "kpi",
        ],
    ),
    (
        "Drug Discovery & Healthcare",
        &[
            "drug", "pharmaceutical", "medicine", "therapeutic", "clinical", "patient",
            "disease", "diagnosis", "treatment", "protein", "molecule", "cell", "gene",
            "genomic", "biological", "medical imaging", "healthcare", "hospital", "doctor",
            "therapy",
        ],
    ),
    (
        "Digital Twins & Simulation",
        &[
            "digital twin", "digital replica", "simulation", "virtual environment", "synthetic",
            "physics-based", "real-time simulation", "interactive simulation",
            "physical system", "mirror", "replica", "virtual world", "metaverse",
        ],
    ),
    (
        "Multi-Agent Systems",
        &[
            "multi-agent", "agent", "autonomous agent", "swarm", "collective intelligence",
            "distributed decision", "collaboration", "coordination", "cooperative",
            "emergent behavior",
        ],
    ),
    (
        "Education & Training",
        &[
            "education", "training", "learning", "teach", "student", "curriculum", "course",
            "classroom", "certification", "skill", "knowledge", "career",
            "professional development",
        ],
    ),
    (
        "Financial Technology",
        &[
            "finance", "financial", "trading", "investment", "portfolio", "risk", "banking",
            "payment", "transaction", "stock", "market", "fintech", "cryptocurrency",
            "blockchain", "economic",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Lowercase substrings.
    pub keywords: Vec<String>,
}

/// Immutable, ordered category → keywords mapping. Built once and passed to
/// the categorizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN.iter().map(|(name, kws)| (*name, kws.iter().copied())))
    }

    /// Keywords are lowercased so matching can stay a plain substring test.
    pub fn from_pairs<'a, I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, K)>,
        K: IntoIterator<Item = &'a str>,
    {
        let categories = pairs
            .into_iter()
            .map(|(name, kws)| Category {
                name: name.to_string(),
                keywords: kws.into_iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        CategoryTable { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}
