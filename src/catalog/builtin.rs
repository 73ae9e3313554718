//! The site's own topic table

use lazy_static::lazy_static;

use super::{Catalog, Category, Group, Link};

lazy_static! {
    static ref BUILTIN: Catalog =
        Catalog::new(categories()).expect("built-in catalog must pass validation");
}

/// The built-in catalog. Same sequence on every call.
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

fn placeholders(titles: &[&str]) -> Vec<Link> {
    titles.iter().map(|t| Link::placeholder(*t)).collect()
}

fn categories() -> Vec<Category> {
    vec![
        Category::new(
            "Fundamentals",
            "#868e96",
            vec![
                Group::new("HTML", placeholders(&["Semantic"])),
                Group::new(
                    "CSS",
                    placeholders(&[
                        "Box Model",
                        "Flexbox",
                        "Grid",
                        "Animation/Transition",
                        "Responsiveness(Meida query)",
                    ]),
                ),
                Group::new(
                    "JavaScript",
                    placeholders(&[
                        "Variables",
                        "Array",
                        "Object",
                        "Function(Tradiional vs Arrow)",
                        "Fetch Api",
                        "Asynchronous(Promise, async/await)",
                    ]),
                ),
            ],
        ),
        Category::new(
            "Front-end",
            "#2f9e44",
            vec![
                Group::new(
                    "React",
                    vec![
                        Link::to("Suspense", "/docs/frontend/react/suspense"),
                        Link::to("useTransition", "/docs/frontend/react/usetransition"),
                        Link::to("useOptimistic", "/docs/frontend/react/useoptimistic"),
                    ],
                ),
                Group::new("Typescript", vec![]),
                Group::new("Data Management", placeholders(&["Redux", "Zustand"])),
                Group::new("HTTP/WS", placeholders(&["Axios"])),
                Group::new(
                    "UI",
                    vec![
                        Link::to("Tailwind", "/docs/useful-links/tailwind-cheatsheet"),
                        Link::placeholder("Framer Motion"),
                        Link::placeholder("Shadcn UI"),
                    ],
                ),
            ],
        ),
        Category::new(
            "Front-end Tooling",
            "#e03131",
            vec![
                Group::new("Build Tools", placeholders(&["Vite", "create-raect-app"])),
                Group::new("Bundlers", placeholders(&["Turbopack", "Webpack", "Rollup"])),
                Group::new("Package Management", placeholders(&["npm", "yarn", "pnpm"])),
            ],
        ),
        Category::new(
            "Backend",
            "#9c36b5",
            vec![
                Group::new("NodeJS", placeholders(&["Express/Koa"])),
                Group::new("ASP.NET Core", vec![]),
                Group::new("Flask", vec![]),
            ],
        ),
        Category::new("Full-stack", "#1971c2", vec![Group::new("Next.js", vec![])]),
        Category::new(
            "Database",
            "#fab005",
            vec![
                Group::new("RDB", placeholders(&["Postgres"])),
                Group::new("NoSQL", placeholders(&["Redis", "MongoDB"])),
                Group::new("Web Storage", placeholders(&["IndexedDB"])),
                Group::new("ORM", placeholders(&["Prisma", "Drizzle", "Mongoose"])),
            ],
        ),
        Category::new("Mobile", "#2f9e44", vec![Group::new("PWA", vec![])]),
        Category::new("Authentication", "#e8590c", vec![Group::new("Clerk", vec![])]),
        Category::new("Version Control", "#846358", vec![Group::new("Git", vec![])]),
        Category::new("containerization", "#0db7ed", vec![Group::new("Docker", vec![])]),
        Category::new("CI/CD", "#2f9e44", vec![]),
        Category::new(
            "Cloud Computing Platform",
            "#9c36b5",
            vec![
                Group::new("AWS", vec![]),
                Group::new(
                    "Azure",
                    vec![Link::to(
                        "Fundamentals",
                        "/docs/cloud-computing-platform/Azure/azure-fundamentals",
                    )],
                ),
            ],
        ),
    ]
}
