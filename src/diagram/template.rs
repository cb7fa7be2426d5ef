/// Top-down view of the car, rear on the left and front on the right.
///
/// Column alignment depends on every space in here, including the trailing
/// ones. Value placeholders use the keys from [`super::PlaceholderKey`].
pub const WEIGHT_DIAGRAM: &str = concat!(
    "\n",
    "             {a0} Lbs.        {vsd}         {b0} Lbs.\n",
    "              {a1}%                          {b1}%\n",
    "            --------       (left)          --------\n",
    "            |      |      {c0} Lbs. {vsd}  |      |\n",
    "            |      |       {c1}%           |      |\n",
    "            --------  ------------------   --------   -----\n",
    "              -||----/       \\          \\_____||_____/     \\ \n",
    "              |               \\                             \\ \n",
    "  (Rear)      |                \\                             -|   (Front)\n",
    "  {d0} Lbs.{vss}   |          {e0} Lbs. - {e1}%    {vsd}           |   {f0} Lbs.\n",
    "   {d1}%      |                  \\                           -|    {f1}%\n",
    "              |                   \\      _____  _____       /\n",
    "              -||----\\             \\    /     ||     \\     /             \n",
    "            --------  ------------------   --------   -----\n",
    "            |      |       {g0} Lbs.{vsd}  |      |\n",
    "            |      |        {g1}%          |      |\n",
    "            --------       (Right)         --------\n",
    "             {h0} Lbs.     {vsd}            {i0} Lbs.\n",
    "              {h1}%                          {i1}%",
);

/// Widest weight, in digits, the diagram columns are laid out for.
pub const MAX_DIGIT_LENGTH: usize = 4;

/// Extra spaces a `{vsd}` adds to make up for its own five template columns.
pub const DYNAMIC_SPACE_PADDING: usize = 5;

/// Upper bound for `max_digit_length`. Twenty digits hold any `u64`.
pub const MAX_DIGIT_LENGTH_LIMIT: usize = 20;

/// Upper bound for `dynamic_space_padding`.
pub const DYNAMIC_SPACE_PADDING_LIMIT: usize = 64;
