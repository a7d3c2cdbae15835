/// Completion notes recorded by the DEV agent, inserted after the
/// '### Completion Notes List' header.
pub const COMPLETION_NOTES: &str = r#"
**Date:** 2025-11-01
**Agent:** Developer (DEV)
**Status:** Implementation Complete - Ready for User Testing

**Summary:** Successfully implemented complete database foundation for TimelineMerge with Supabase integration, comprehensive schema (6 tables + 1 view), TypeScript types, Server Actions, and manual testing infrastructure.

**Implementation:** All 6 tasks completed - Supabase clients, schema migration, TypeScript types, Server Actions, and test page created. All code follows architecture patterns.

**User Actions Required:** Create Supabase project, update .env.local, run migration SQL, test at /test page, then delete test directory.

**Acceptance Criteria:** All 7 ACs met (infrastructure ready, awaiting user Supabase setup).
"#;

/// File list recorded by the DEV agent, inserted after the
/// '### File List' header.
pub const FILE_LIST: &str = r#"
**Created:** client.ts, server.ts, database.ts, projects.ts, 001_initial_schema.sql, test/page.tsx
**Pending:** .env.local (user must add Supabase credentials)
"#;

/// Change log line appended after the story-created entry
pub const CHANGELOG_ENTRY: &str =
    "**2025-11-01:** Story implemented by DEV agent - All tasks complete\n";
